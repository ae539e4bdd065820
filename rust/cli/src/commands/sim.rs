//! Simulation command: auto-play many hands with a hold strategy.
//!
//! Each hand is dealt, handed to a [`HoldStrategy`](jacks_ai::HoldStrategy)
//! for its holds, drawn and paid, all through the same session API the
//! interactive front-end uses. The run stops early when the credits no
//! longer cover the bet.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//! let args = vec!["jacks", "sim", "--hands", "1000", "--seed", "42", "--strategy", "baseline"];
//! let code = jacks_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use crate::commands::build_record;
use crate::config;
use crate::error::CliError;
use crate::logging::log_events;
use crate::ui;
use jacks_ai::create_strategy;
use jacks_engine::cards::Card;
use jacks_engine::errors::GameError;
use jacks_engine::hand::HandRank;
use jacks_engine::logger::HandLogger;
use jacks_engine::payout::PAYOUT_TABLE;
use jacks_engine::rules::HAND_SIZE;
use jacks_engine::session::{GameSession, SessionOptions};
use std::io::Write;
use std::path::PathBuf;

/// Flags of the `sim` subcommand. Unset values come from the configuration.
#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub hands: u64,
    pub seed: Option<u64>,
    pub bet: Option<u8>,
    pub credits: Option<u32>,
    pub strategy: Option<String>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct SimTotals {
    hands: u64,
    wagered: u64,
    won: u64,
    // indexed by HandRank discriminant
    counts: [u64; 10],
}

impl SimTotals {
    fn return_pct(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.won as f64 * 100.0 / self.wagered as f64
        }
    }
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let strategy_name = opts.strategy.unwrap_or(cfg.strategy);
    let strategy = create_strategy(&strategy_name)?;
    let credits = opts.credits.unwrap_or(cfg.starting_credits);
    if credits == 0 {
        return Err(CliError::InvalidInput("credits must be >= 1".to_string()));
    }

    let mut session = GameSession::new(SessionOptions {
        seed: opts.seed.or(cfg.seed),
        starting_credits: credits,
    });
    let bet = session.set_bet(i64::from(opts.bet.unwrap_or(cfg.bet)))?;
    let mut logger = opts.output.map(HandLogger::create).transpose()?;

    writeln!(
        out,
        "sim: strategy={} hands={} seed={} bet={}",
        strategy.name(),
        opts.hands,
        session.seed(),
        bet
    )?;
    tracing::info!(
        strategy = strategy.name(),
        hands = opts.hands,
        seed = session.seed(),
        "simulation started"
    );

    let mut totals = SimTotals::default();
    for _ in 0..opts.hands {
        if session.credits() < u32::from(bet) {
            ui::display_warning(
                err,
                &format!("out of credits after {} hands", totals.hands),
            )?;
            break;
        }

        log_events(&session.deal()?);
        let dealt = session.hand_cards();
        let cards = <[Card; HAND_SIZE]>::try_from(dealt.as_slice())
            .map_err(|_| GameError::InvalidHandSize(dealt.len()))?;
        log_events(&session.set_holds(strategy.choose_holds(&cards))?);
        log_events(&session.draw()?);

        let Some(outcome) = session.last_outcome() else {
            continue;
        };
        totals.hands += 1;
        totals.wagered += u64::from(bet);
        totals.won += u64::from(outcome.winnings);
        totals.counts[outcome.rank as usize] += 1;

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            if let Some(record) = build_record(id, &session, dealt) {
                logger.write(&record)?;
            }
        }
    }

    tracing::info!(
        hands = totals.hands,
        won = totals.won,
        credits = session.credits(),
        "simulation finished"
    );
    write_summary(out, &totals, session.credits())
}

fn write_summary(out: &mut dyn Write, totals: &SimTotals, credits: u32) -> Result<(), CliError> {
    writeln!(out, "Hands: {}", totals.hands)?;
    writeln!(out, "Wagered: {}", totals.wagered)?;
    writeln!(out, "Won: {}", totals.won)?;
    writeln!(out, "Return: {:.2}%", totals.return_pct())?;
    writeln!(out, "Credits: {}", credits)?;
    for rank in PAYOUT_TABLE.iter().chain(std::iter::once(&HandRank::NoWin)) {
        writeln!(
            out,
            "  {:<16}{:>8}",
            rank.label(),
            totals.counts[*rank as usize]
        )?;
    }
    Ok(())
}
