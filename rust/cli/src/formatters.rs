//! Card, hand, pay table and outcome formatters for terminal display.
//!
//! Pure functions; nothing here touches the session. Card symbols use
//! Unicode suits with an ASCII fallback for terminals that cannot render
//! them.
//!
//! ## Unicode vs ASCII Fallback
//!
//! On Windows the module checks for a modern terminal (WT_SESSION,
//! TERM_PROGRAM, VSCODE_INJECTION); Unix-like systems are assumed to
//! support Unicode.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use jacks_engine::cards::{Card, Rank, Suit};
//! use jacks_cli::formatters::format_card;
//!
//! let ten_spades = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten_spades) == "10♠" || format_card(&ten_spades) == "10s");
//! ```

use jacks_engine::cards::{Card, Suit};
use jacks_engine::payout::{Outcome, PAYOUT_TABLE, PayoutTier};
use jacks_engine::session::Slot;

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Five bracketed slots with their 1-based numbers; held cards are marked.
///
/// ```rust
/// use jacks_cli::formatters::format_hand;
///
/// assert_eq!(
///     format_hand(&[None; 5]),
///     "1:[    ] 2:[    ] 3:[    ] 4:[    ] 5:[    ]"
/// );
/// ```
pub fn format_hand(hand: &[Option<Slot>; 5]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Some(s) if s.held => format!("{}:[{:>3}*]", i + 1, format_card(&s.card)),
            Some(s) => format!("{}:[{:>3} ]", i + 1, format_card(&s.card)),
            None => format!("{}:[    ]", i + 1),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pay table lines for `bet`, best hand first.
pub fn format_paytable(bet: u8) -> Vec<String> {
    PAYOUT_TABLE
        .iter()
        .map(|rank| {
            format!(
                "{:<16}{:>5}",
                rank.label(),
                rank.multiplier() * u32::from(bet)
            )
        })
        .collect()
}

pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome.tier {
        PayoutTier::None => "No win".to_string(),
        PayoutTier::Large => format!(
            "{}! Big win: {} credits",
            outcome.rank.label(),
            outcome.winnings
        ),
        PayoutTier::Small | PayoutTier::Medium => format!(
            "{}! You win {} credits",
            outcome.rank.label(),
            outcome.winnings
        ),
    }
}
