//! # Guests CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch and printing
//! live in `cli/`, and this file only invokes `cli::run()` and turns an error
//! into exit status 1.
//!
//! ```text
//! guests read            print the list
//! guests create NAME     append NAME, print it
//! ```
//!
//! Everything else is a usage error (status 1, nothing written).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
