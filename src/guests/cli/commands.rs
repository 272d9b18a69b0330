use super::print::{log_messages, print_added, print_guests};
use super::setup::{create_usage, usage, Cli, Commands};
use clap::error::ErrorKind;
use clap::Parser;
use guests::api::GuestsApi;
use guests::config::GuestsConfig;
use guests::error::{GuestsError, Result};
use guests::store::fs::FileStore;
use std::io::IsTerminal;
use tracing::{debug, Level};

/// What the user asked for, once the arguments have been checked.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Read,
    Create(String),
}

struct AppContext {
    api: GuestsApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return Err(parse_error(e)),
    };
    let action = select_action(cli.command.as_ref())?;

    init_logging(cli.verbose);
    debug!(?action, "dispatching");

    let mut ctx = init_context(&cli)?;
    match action {
        Action::Read => handle_read(&ctx),
        Action::Create(name) => handle_create(&mut ctx, name),
    }
}

/// Help and version requests print and exit 0; every other parse failure
/// becomes the top-level usage error.
fn parse_error(e: clap::Error) -> GuestsError {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => GuestsError::Usage(usage()),
    }
}

fn select_action(command: Option<&Commands>) -> Result<Action> {
    match command {
        None => Err(GuestsError::Usage(usage())),
        Some(Commands::Read) => Ok(Action::Read),
        Some(Commands::Create { guest }) => match guest.as_deref() {
            Some(name) if !name.is_empty() => Ok(Action::Create(name.to_string())),
            _ => Err(GuestsError::Usage(create_usage())),
        },
    }
}

fn init_logging(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .finish();

    // Only fails if a subscriber is already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match &cli.config {
        Some(path) => GuestsConfig::load(path)?,
        None => GuestsConfig::default(),
    };
    let path = config.resolve_data_file(cli.file.as_deref())?;
    debug!(path = %path.display(), pretty = config.pretty, "using guest list");

    let store = FileStore::new(path).with_pretty(config.pretty);
    Ok(AppContext {
        api: GuestsApi::new(store),
    })
}

fn handle_read(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.read()?;
    log_messages(&result.messages);
    print_guests(&result.guests);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.create(name)?;
    log_messages(&result.messages);
    if let Some(added) = &result.added {
        print_added(added);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_subcommand_is_usage_error() {
        let err = select_action(None).unwrap_err();
        assert!(matches!(err, GuestsError::Usage(ref line) if line == "Usage: guests [read | create]"));
    }

    #[test]
    fn read_selects_read() {
        assert_eq!(select_action(Some(&Commands::Read)).unwrap(), Action::Read);
    }

    #[test]
    fn create_with_name_selects_create() {
        let cmd = Commands::Create {
            guest: Some("Mary".into()),
        };
        assert_eq!(
            select_action(Some(&cmd)).unwrap(),
            Action::Create("Mary".into())
        );
    }

    #[test]
    fn create_without_name_is_usage_error() {
        let cmd = Commands::Create { guest: None };
        let err = select_action(Some(&cmd)).unwrap_err();
        assert!(matches!(err, GuestsError::Usage(ref line) if line == "Usage: guests create GUEST"));
    }

    #[test]
    fn create_with_empty_name_is_usage_error() {
        let cmd = Commands::Create {
            guest: Some(String::new()),
        };
        assert!(matches!(
            select_action(Some(&cmd)),
            Err(GuestsError::Usage(_))
        ));
    }

    #[test]
    fn unknown_flag_maps_to_usage() {
        let e = Cli::try_parse_from(["guests", "--bogus"]).unwrap_err();
        assert!(matches!(parse_error(e), GuestsError::Usage(_)));
    }
}
