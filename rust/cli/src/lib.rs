//! # jacks CLI Library
//!
//! Terminal front-end for the Jacks or Better engine. It plays the engine
//! interactively and exposes a few tooling commands around it.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["jacks", "play", "--seed", "42"];
//! let code = jacks_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play an interactive session on the terminal
//! - `eval`: Classify five cards
//! - `paytable`: Print the pay table for a bet
//! - `sim`: Auto-play many hands with a hold strategy
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, JacksCli};
use commands::{
    handle_cfg_command, handle_eval_command, handle_paytable_command, handle_play_command,
    handle_sim_command,
};

pub use commands::SimOptions;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "paytable", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses `args`, runs the subcommand and returns the process exit code:
/// [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Errors are written to
/// `err` as `Error: ...`.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = jacks_cli::run(["jacks", "eval", "Ts", "Js", "Qs", "Ks", "As"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush (x250)"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match JacksCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            seed,
            credits,
            bet,
            history,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, credits, bet, history, out, err, &mut stdin_lock)
        }
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Paytable { bet } => handle_paytable_command(bet, out),
        Commands::Sim {
            hands,
            seed,
            bet,
            credits,
            strategy,
            output,
        } => handle_sim_command(
            SimOptions {
                hands,
                seed,
                bet,
                credits,
                strategy,
                output,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err);
    let _ = writeln!(err, "Jacks or Better CLI");
    let _ = writeln!(err, "Usage: jacks <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: jacks --help");
    exit_code::ERROR
}
