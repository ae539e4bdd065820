//! # jacks-ai: Automatic Hold Strategies
//!
//! Decides which of the five dealt cards to keep, so hands can be played
//! without a human at the keyboard (simulations, demos, regression runs).
//!
//! ## Core Components
//!
//! - [`HoldStrategy`] - Trait every strategy implements
//! - [`baseline`] - Rule-based strategy approximating standard Jacks or Better play
//! - [`create_strategy`] - Factory that builds a strategy from its name
//!
//! ## Quick Start
//!
//! ```rust
//! use jacks_ai::create_strategy;
//! use jacks_engine::session::{GameSession, SessionOptions};
//!
//! let strategy = create_strategy("baseline").unwrap();
//! let mut session = GameSession::new(SessionOptions {
//!     seed: Some(42),
//!     ..SessionOptions::default()
//! });
//! session.deal().unwrap();
//!
//! let cards: [_; 5] = session.hand_cards().try_into().unwrap();
//! session.set_holds(strategy.choose_holds(&cards)).unwrap();
//! session.draw().unwrap();
//! ```

use jacks_engine::cards::Card;
use thiserror::Error;

pub mod baseline;

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: [&str; 3] = ["baseline", "discard-all", "hold-all"];

/// Chooses held flags for a freshly dealt hand.
///
/// Implementations must be deterministic: the same five cards always give
/// the same mask, so seeded simulations replay exactly.
pub trait HoldStrategy: Send + Sync {
    /// Returns one flag per slot; `true` keeps the card on the draw.
    fn choose_holds(&self, cards: &[Card; 5]) -> [bool; 5];

    /// Identifier shown in reports.
    fn name(&self) -> &str;
}

/// Throws the whole hand away every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardAllStrategy;

impl HoldStrategy for DiscardAllStrategy {
    fn choose_holds(&self, _cards: &[Card; 5]) -> [bool; 5] {
        [false; 5]
    }

    fn name(&self) -> &str {
        "discard-all"
    }
}

/// Stands pat on every deal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldAllStrategy;

impl HoldStrategy for HoldAllStrategy {
    fn choose_holds(&self, _cards: &[Card; 5]) -> [bool; 5] {
        [true; 5]
    }

    fn name(&self) -> &str {
        "hold-all"
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Unknown strategy: {0} (expected one of baseline, discard-all, hold-all)")]
    Unknown(String),
}

/// Builds a strategy by name.
///
/// # Errors
///
/// Returns [`StrategyError::Unknown`] for names not in [`STRATEGY_NAMES`].
///
/// # Example
///
/// ```rust
/// use jacks_ai::create_strategy;
///
/// let s = create_strategy("baseline").unwrap();
/// assert_eq!(s.name(), "baseline");
/// assert!(create_strategy("psychic").is_err());
/// ```
pub fn create_strategy(name: &str) -> Result<Box<dyn HoldStrategy>, StrategyError> {
    match name {
        "baseline" => Ok(Box::new(baseline::BaselineStrategy::new())),
        "discard-all" => Ok(Box::new(DiscardAllStrategy)),
        "hold-all" => Ok(Box::new(HoldAllStrategy)),
        other => Err(StrategyError::Unknown(other.to_string())),
    }
}
