use thiserror::Error;

use crate::cards::Card;
use crate::session::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient credits: have {credits}, bet is {bet}")]
    InsufficientCredits { credits: u32, bet: u8 },
    #[error("Cannot {action} while {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },
    #[error("Invalid slot {slot}, expected 0..=4")]
    InvalidSlot { slot: usize },
    #[error("Deck exhausted: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("A hand needs exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
}
