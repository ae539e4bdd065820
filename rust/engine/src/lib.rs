//! # jacks-engine: Jacks or Better Video Poker Core
//!
//! A deterministic single-player video poker engine. Provides the shoe,
//! the five-card hand evaluator, the pay table and the deal/hold/draw
//! session state machine, with a seedable RNG so every session can be
//! replayed exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and deck construction
//! - [`deck`] - Fisher-Yates shuffling and dealing with ChaCha20 RNG
//! - [`hand`] - Jacks or Better hand classification
//! - [`payout`] - Pay table, winnings and payout tiers
//! - [`rules`] - Bet limits and session constants
//! - [`session`] - The `GameSession` state machine
//! - [`events`] - Notifications returned by session actions
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use jacks_engine::cards::parse_cards;
//! use jacks_engine::hand::{evaluate_cards, HandRank};
//!
//! let cards = parse_cards("Ts Js Qs Ks As").unwrap();
//! let rank = evaluate_cards(&cards).unwrap();
//! assert_eq!(rank, HandRank::RoyalFlush);
//! assert_eq!(rank.multiplier(), 250);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use jacks_engine::events::GameEvent;
//! use jacks_engine::session::{GameSession, SessionOptions};
//!
//! let mut session = GameSession::new(SessionOptions {
//!     seed: Some(42),
//!     ..SessionOptions::default()
//! });
//! session.deal().unwrap();
//! session.toggle_hold(2).unwrap();
//! for event in session.draw().unwrap() {
//!     if let GameEvent::DrawResolved { outcome, .. } = event {
//!         println!("{} pays {}", outcome.rank, outcome.winnings);
//!     }
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod events;
pub mod hand;
pub mod logger;
pub mod payout;
pub mod rules;
pub mod session;
