//! `eval`: classify five cards given on the command line.

use crate::error::CliError;
use crate::formatters::format_card;
use jacks_engine::cards::Card;
use jacks_engine::hand::evaluate_cards;
use std::io::Write;

/// Accepts each card as its own argument (`Ts Js Qs Ks As`) or several per
/// argument separated by spaces.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = cards
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::parse::<Card>)
        .collect::<Result<Vec<_>, _>>()?;
    let rank = evaluate_cards(&parsed)?;

    let shown: Vec<String> = parsed.iter().map(format_card).collect();
    writeln!(out, "{}", shown.join(" "))?;
    writeln!(out, "{} (x{})", rank.label(), rank.multiplier())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jacks_engine::errors::GameError;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn prints_label_and_multiplier() {
        let mut out = Vec::new();
        handle_eval_command(&args("Ts Js Qs Ks As"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Royal Flush (x250)\n"));
    }

    #[test]
    fn losing_hand_has_zero_multiplier() {
        let mut out = Vec::new();
        handle_eval_command(&["2s 5h 7d 9c Jh".to_string()], &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No Win (x0)"));
    }

    #[test]
    fn rejects_bad_input() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_eval_command(&args("Ts Js Qs Ks"), &mut out),
            Err(CliError::Game(GameError::InvalidHandSize(4)))
        ));
        assert!(matches!(
            handle_eval_command(&args("Ts Ts Qs Ks As"), &mut out),
            Err(CliError::Game(GameError::DuplicateCard(_)))
        ));
        assert!(matches!(
            handle_eval_command(&args("Ts Js Qs Ks Zz"), &mut out),
            Err(CliError::Game(GameError::InvalidCard(_)))
        ));
    }
}
