//! # Play Command
//!
//! Interactive video poker on the terminal.
//!
//! The loop reads one command per line from stdin, turns it into a session
//! action and prints the hand after every change. Rejected actions print an
//! `Error:` line on stderr and the loop carries on; `q` or EOF ends the
//! session with a short summary.
//!
//! ## Features
//!
//! - Bet controls (`bet N`, `+`, `-`) clamped by the engine
//! - Hold toggles by 1-based slot number (`hold 1 3 5`)
//! - Empty line advances (deal when betting, draw when holding)
//! - Optional JSONL hand history via [`HandLogger`]

use crate::commands::build_record;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_outcome, format_paytable};
use crate::io_utils::read_stdin_line;
use crate::logging::log_events;
use crate::ui;
use crate::validation::{HELP_TEXT, ParseResult, parse_play_input};
use jacks_engine::cards::Card;
use jacks_engine::logger::HandLogger;
use jacks_engine::rules::MIN_BET;
use jacks_engine::session::{Action, GameSession, Phase, SessionOptions};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Handle the play command.
///
/// Flags override the resolved configuration; anything left unset falls
/// back to it.
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Some(42), None, None, None, &mut stdout(), &mut stderr(), &mut input)?;
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    credits: Option<u32>,
    bet: Option<u8>,
    history: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let credits = credits.unwrap_or(cfg.starting_credits);
    if credits == 0 {
        return Err(CliError::InvalidInput("credits must be >= 1".to_string()));
    }

    let mut session = GameSession::new(SessionOptions {
        seed: seed.or(cfg.seed),
        starting_credits: credits,
    });
    session.set_bet(i64::from(bet.unwrap_or(cfg.bet)))?;

    let mut logger = history.map(HandLogger::append).transpose()?;

    tracing::info!(seed = session.seed(), credits, "session started");
    writeln!(
        out,
        "play: seed={} credits={} bet={}",
        session.seed(),
        session.credits(),
        session.bet()
    )?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut dealt: Vec<Card> = Vec::new();

    loop {
        if session.phase() == Phase::Betting && session.credits() < u32::from(MIN_BET) {
            writeln!(out, "Out of credits.")?;
            break;
        }

        write!(
            out,
            "[{}] credits={} bet={} > ",
            session.phase(),
            session.credits(),
            session.bet()
        )?;
        out.flush()?;

        let line = match read_stdin_line(stdin) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                return Err(e.into());
            }
        };

        let action = match parse_play_input(&line) {
            ParseResult::Quit => break,
            ParseResult::Help => {
                writeln!(out, "{}", HELP_TEXT)?;
                continue;
            }
            ParseResult::Table => {
                for row in format_paytable(session.bet()) {
                    writeln!(out, "  {}", row)?;
                }
                continue;
            }
            ParseResult::Invalid(msg) => {
                tracing::debug!(input = %line, "unparsed input");
                ui::write_error(err, &msg)?;
                continue;
            }
            ParseResult::Hold(slots) => {
                let mut mask = session.held_mask();
                for slot in slots {
                    mask[slot] = !mask[slot];
                }
                match session.set_holds(mask) {
                    Ok(events) => {
                        log_events(&events);
                        writeln!(out, "{}", format_hand(session.hand()))?;
                    }
                    Err(e) => reject(err, &e)?,
                }
                continue;
            }
            ParseResult::Advance => match session.phase() {
                Phase::Betting => Action::Deal,
                Phase::Holding => Action::Draw,
            },
            ParseResult::Action(action) => action,
        };

        let events = match session.apply(action) {
            Ok(events) => events,
            Err(e) => {
                reject(err, &e)?;
                continue;
            }
        };
        log_events(&events);

        match action {
            Action::SetBet(_) | Action::BetUp | Action::BetDown => {
                writeln!(out, "Bet: {}", session.bet())?;
            }
            Action::Deal => {
                dealt = session.hand_cards();
                writeln!(out, "{}", format_hand(session.hand()))?;
            }
            Action::ToggleHold(_) => {
                writeln!(out, "{}", format_hand(session.hand()))?;
            }
            Action::Draw => {
                writeln!(out, "{}", format_hand(session.hand()))?;
                if let Some(outcome) = session.last_outcome() {
                    writeln!(out, "{}", format_outcome(&outcome))?;
                }
                writeln!(out, "Credits: {}", session.credits())?;
                if let Some(logger) = logger.as_mut() {
                    let id = logger.next_id();
                    if let Some(record) = build_record(id, &session, std::mem::take(&mut dealt)) {
                        logger.write(&record)?;
                    }
                }
            }
        }
    }

    tracing::info!(
        hands = session.hands_played(),
        credits = session.credits(),
        "session ended"
    );
    writeln!(out)?;
    writeln!(out, "Hands played: {}", session.hands_played())?;
    writeln!(out, "Credits: {}", session.credits())?;
    Ok(())
}

fn reject(err: &mut dyn Write, e: &jacks_engine::errors::GameError) -> Result<(), CliError> {
    tracing::warn!(error = %e, "action rejected");
    ui::write_error(err, &e.to_string())?;
    Ok(())
}
