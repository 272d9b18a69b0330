use colored::Colorize;
use guests::api::{CmdMessage, MessageLevel};
use guests::error::GuestsError;
use guests::model::GuestList;
use std::io::IsTerminal;
use tracing::{debug, info, warn};

// stdout carries only the command's output; notes go through tracing to stderr.
pub(super) fn log_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => debug!("{}", message.content),
            MessageLevel::Success => info!("{}", message.content),
            MessageLevel::Warning => warn!("{}", message.content),
        }
    }
}

pub(super) fn print_guests(guests: &GuestList) {
    println!("{}", guests);
}

pub(super) fn print_added(name: &str) {
    println!("{}", name);
}

pub fn report_error(e: &GuestsError) {
    // colored only looks at stdout; errors go to stderr
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match e {
        GuestsError::Usage(line) => eprintln!("{}", line.yellow()),
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}
