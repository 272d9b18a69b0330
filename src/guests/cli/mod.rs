//! # CLI Layer
//!
//! One possible UI client for the guests library. This is the only place that:
//! - Parses arguments (clap, `setup.rs`)
//! - Knows about stdout/stderr (`print.rs`)
//! - Installs the tracing subscriber
//!
//! Flow, in `commands.rs`: parse → pick an action (usage errors stop here,
//! before any file is touched) → set up logging → resolve the data file →
//! call the API → print.

mod commands;
mod print;
mod setup;

pub use commands::run;
pub use print::report_error;
