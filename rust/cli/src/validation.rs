//! Input parsing for the interactive `play` loop.
//!
//! Every line the player types becomes a [`ParseResult`]; nothing here
//! touches the session, so whether a command is allowed in the current
//! phase is left to the engine.

use jacks_engine::rules::HAND_SIZE;
use jacks_engine::session::Action;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A single engine action
    Action(Action),
    /// Zero-based slots whose held flag should be toggled
    Hold(Vec<usize>),
    /// Empty line: deal when betting, draw when holding
    Advance,
    /// Show the pay table for the current bet
    Table,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  bet N        set the bet (1-5)
  + / -        raise or lower the bet by one
  deal, d      take the bet and deal five cards
  hold N...    toggle hold on slots 1-5 (also: h 1 3 5)
  draw         replace the cards not held
  <enter>      deal or draw, whichever comes next
  table        show the pay table
  help, ?      show this help
  q, quit      leave the table";

/// Parse one line of player input (case-insensitive).
///
/// # Example
///
/// ```rust
/// use jacks_cli::validation::{parse_play_input, ParseResult};
/// use jacks_engine::session::Action;
///
/// assert_eq!(parse_play_input("bet 3"), ParseResult::Action(Action::SetBet(3)));
/// assert_eq!(parse_play_input("h 1 5"), ParseResult::Hold(vec![0, 4]));
/// assert_eq!(parse_play_input(""), ParseResult::Advance);
/// assert_eq!(parse_play_input("Q"), ParseResult::Quit);
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return ParseResult::Advance;
    };

    match command {
        "q" | "quit" => ParseResult::Quit,
        "help" | "?" => ParseResult::Help,
        "table" => ParseResult::Table,
        "deal" | "d" => ParseResult::Action(Action::Deal),
        "draw" => ParseResult::Action(Action::Draw),
        "+" => ParseResult::Action(Action::BetUp),
        "-" => ParseResult::Action(Action::BetDown),
        "bet" => match parts.get(1) {
            None => ParseResult::Invalid("Bet requires an amount (e.g., 'bet 5')".to_string()),
            Some(n) => match n.parse::<i64>() {
                Ok(amount) => ParseResult::Action(Action::SetBet(amount)),
                Err(_) => ParseResult::Invalid(format!("Invalid bet amount '{}'", n)),
            },
        },
        "hold" | "h" => parse_hold_slots(&parts[1..]),
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Type 'help' for a list of commands",
            command
        )),
    }
}

fn parse_hold_slots(args: &[&str]) -> ParseResult {
    if args.is_empty() {
        return ParseResult::Invalid("Hold requires slot numbers (e.g., 'hold 1 3')".to_string());
    }
    let mut slots = Vec::with_capacity(args.len());
    for arg in args {
        match arg.parse::<usize>() {
            Ok(n) if (1..=HAND_SIZE).contains(&n) => slots.push(n - 1),
            _ => {
                return ParseResult::Invalid(format!(
                    "Invalid slot '{}', expected 1-{}",
                    arg, HAND_SIZE
                ));
            }
        }
    }
    ParseResult::Hold(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bet_controls() {
        assert_eq!(parse_play_input("+"), ParseResult::Action(Action::BetUp));
        assert_eq!(parse_play_input("-"), ParseResult::Action(Action::BetDown));
        assert_eq!(
            parse_play_input("BET 9"),
            ParseResult::Action(Action::SetBet(9))
        );
        assert_eq!(
            parse_play_input("bet -2"),
            ParseResult::Action(Action::SetBet(-2))
        );
    }

    #[test]
    fn bet_without_amount_is_invalid() {
        assert!(matches!(parse_play_input("bet"), ParseResult::Invalid(_)));
        match parse_play_input("bet lots") {
            ParseResult::Invalid(msg) => assert!(msg.contains("lots")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn deal_and_draw() {
        assert_eq!(parse_play_input("d"), ParseResult::Action(Action::Deal));
        assert_eq!(parse_play_input(" deal "), ParseResult::Action(Action::Deal));
        assert_eq!(parse_play_input("draw"), ParseResult::Action(Action::Draw));
        assert_eq!(parse_play_input("   "), ParseResult::Advance);
    }

    #[test]
    fn hold_slots_are_one_based() {
        assert_eq!(parse_play_input("hold 1 2 5"), ParseResult::Hold(vec![0, 1, 4]));
        assert!(matches!(parse_play_input("hold 0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("hold 6"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("hold"), ParseResult::Invalid(_)));
    }

    #[test]
    fn meta_commands() {
        assert_eq!(parse_play_input("?"), ParseResult::Help);
        assert_eq!(parse_play_input("table"), ParseResult::Table);
        assert_eq!(parse_play_input("quit"), ParseResult::Quit);
        match parse_play_input("fold") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
