//! Command-line argument definitions for the `jacks` binary.

use clap::{Parser, Subcommand, value_parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jacks",
    version,
    about = "Jacks or Better video poker",
    long_about = None
)]
pub struct JacksCli {
    /// Log every game event to stderr (overrides JACKS_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session on the terminal
    Play {
        /// Shuffle seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Starting credits
        #[arg(long)]
        credits: Option<u32>,
        /// Initial bet (1-5)
        #[arg(long, value_parser = value_parser!(u8).range(1..=5))]
        bet: Option<u8>,
        /// Append every completed hand to this JSONL file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Classify five cards, e.g. `jacks eval Ts Js Qs Ks As`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Print the pay table for a bet
    Paytable {
        #[arg(long, default_value_t = 1, value_parser = value_parser!(u8).range(1..=5))]
        bet: u8,
    },
    /// Play many hands automatically with a hold strategy
    Sim {
        /// Number of hands to play
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = value_parser!(u8).range(1..=5))]
        bet: Option<u8>,
        #[arg(long)]
        credits: Option<u32>,
        /// baseline, discard-all or hold-all
        #[arg(long)]
        strategy: Option<String>,
        /// Write every hand to this JSONL file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
