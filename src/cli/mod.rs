//! Command-line interface.
//!
//! Flags are handled before the terminal is taken over:
//!
//! ```ignore
//! use rpg_forum::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Run(overrides) => { /* start the TUI */ }
//!     other => run_cli_command(other),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, Overrides, USAGE};
pub use version::{handle_version_command, VERSION};

/// Run a non-TUI command. Returns `false` for [`CliCommand::Run`], which
/// the caller handles itself.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            handle_version_command();
            true
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            true
        }
        CliCommand::Run(_) => false,
    }
}
