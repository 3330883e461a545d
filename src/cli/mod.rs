//! CLI module for the menu-aim demo.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - Resolving the demo's [`MenuAimConfig`](crate::config::MenuAimConfig)
//!
//! # Usage
//!
//! ```ignore
//! use menu_aim::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(options) = run_cli_command(command) {
//!     // start the TUI with `options`
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, DemoOptions, USAGE};
pub use version::{handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the demo options when the TUI should start. `Version` and `Help`
/// print and exit.
pub fn run_cli_command(command: CliCommand) -> Option<DemoOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            std::process::exit(0)
        }
        CliCommand::Run(options) => Some(options),
    }
}
