//! # setgame CLI Library
//!
//! Headless command-line harness over the Set rules engine.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["setgame", "sim", "--games", "10"];
//! let code = setgame_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a new game and list the table and its Sets
//! - `sim`: Auto-play games by following hints
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, SetgameCli};
use commands::{handle_cfg_command, handle_deal_command, handle_sim_command};

pub use commands::sim::{play_out, SimResult};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the matching subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["setgame", "deal", "--seed", "42"];
/// let code = setgame_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SetgameCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return match write!(out, "{}", e) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(_) => exit_code::ERROR,
                };
            }
            let _ = writeln!(err, "{}", e);
            let _ = writeln!(err, "Usage: setgame <command> [options]\n\nCommands:");
            for c in COMMANDS {
                let _ = writeln!(err, "  {}", c);
            }
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Deal { seed, json } => handle_deal_command(seed, json, out),
        Commands::Sim { games, seed } => handle_sim_command(games, seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
