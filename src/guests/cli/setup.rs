use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub const BIN_NAME: &str = "guests";

fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        describe_version(
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("GIT_COMMIT_DATE"),
            env!("IS_RELEASE") == "true",
        )
    })
}

/// `0.1.0` for tagged releases and builds outside git, otherwise
/// `0.1.0@abc1234 2024-01-15 14:30`.
fn describe_version(pkg: &str, hash: &str, date: &str, release: bool) -> String {
    match (release, hash) {
        (true, _) | (_, "") => pkg.to_string(),
        _ => format!("{}@{} {}", pkg, hash, date),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    bin_name = BIN_NAME,
    version = version(),
    disable_help_subcommand = true
)]
#[command(about = "Keep a guest list in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Guest list file (defaults to guests.json next to the executable)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the guest list
    Read,

    /// Add a guest to the end of the list
    Create {
        /// Name of the guest
        guest: Option<String>,
    },
}

pub fn usage() -> String {
    format!("Usage: {} [read | create]", BIN_NAME)
}

pub fn create_usage() -> String {
    format!("Usage: {} create GUEST", BIN_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_read() {
        let cli = Cli::try_parse_from(["guests", "read"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Read));
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_create_with_guest() {
        let cli = Cli::try_parse_from(["guests", "create", "Mary"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Create {
                guest: Some("Mary".into())
            })
        );
    }

    #[test]
    fn create_guest_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["guests", "create"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Create { guest: None }));
    }

    #[test]
    fn no_subcommand_parses_to_none() {
        let cli = Cli::try_parse_from(["guests"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["guests", "read", "--file", "/tmp/g.json", "-v"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/g.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let err = Cli::try_parse_from(["guests", "delete"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
        ));
    }

    #[test]
    fn help_is_not_a_subcommand() {
        let err = Cli::try_parse_from(["guests", "help"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
        ));
    }

    #[test]
    fn version_includes_git_details_for_dev_builds() {
        assert_eq!(
            describe_version("0.1.0", "abc1234", "2024-01-15 14:30", false),
            "0.1.0@abc1234 2024-01-15 14:30"
        );
        assert_eq!(describe_version("0.1.0", "abc1234", "", true), "0.1.0");
        assert_eq!(describe_version("0.1.0", "", "", false), "0.1.0");
    }

    #[test]
    fn usage_lines() {
        assert_eq!(usage(), "Usage: guests [read | create]");
        assert_eq!(create_usage(), "Usage: guests create GUEST");
    }
}
