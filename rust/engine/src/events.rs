use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::payout::Outcome;

/// Outbound notifications produced by session transitions.
///
/// The session never calls into presentation or audio code; every action
/// returns the events it caused, in order, and the caller decides what to do
/// with them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A card landed in `slot`, either on the deal or as a draw replacement.
    CardDealt { slot: usize, card: Card },
    /// The held flag of `slot` changed.
    HoldToggled { slot: usize, held: bool },
    /// The draw finished and the hand was paid.
    DrawResolved { outcome: Outcome, credits: u32 },
    /// The shoe ran low and a fresh one was shuffled.
    ShoeReplenished { remaining: usize },
}
