use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::GameError;
use crate::rules::HAND_SIZE;

/// Jacks or Better hand categories, lowest first. The discriminant is the
/// payout multiplier's position in the pay table, not the multiplier itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    NoWin = 0,
    JacksOrBetter = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    /// Credits paid per credit wagered.
    pub fn multiplier(self) -> u32 {
        match self {
            HandRank::RoyalFlush => 250,
            HandRank::StraightFlush => 50,
            HandRank::FourOfAKind => 25,
            HandRank::FullHouse => 9,
            HandRank::Flush => 6,
            HandRank::Straight => 4,
            HandRank::ThreeOfAKind => 3,
            HandRank::TwoPair => 2,
            HandRank::JacksOrBetter => 1,
            HandRank::NoWin => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "Royal Flush",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::FullHouse => "Full House",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::TwoPair => "Two Pair",
            HandRank::JacksOrBetter => "Jacks or Better",
            HandRank::NoWin => "No Win",
        }
    }

    pub fn is_win(self) -> bool {
        self != HandRank::NoWin
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies five distinct cards. Categories are tried from the top of the
/// pay table down and the first match wins, so a hand is never paid twice.
pub fn evaluate_hand(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 13];
    for c in cards.iter() {
        rank_counts[c.rank.index() as usize] += 1;
    }

    let flush = is_flush(cards);
    let straight = is_straight(cards);

    if flush && straight {
        // An ace-high straight can only be 10-J-Q-K-A
        let ace_high = cards.iter().any(|c| c.rank == Rank::Ace)
            && cards.iter().any(|c| c.rank == Rank::King);
        return if ace_high {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        };
    }

    let count_of = |n: u8| rank_counts.iter().filter(|&&c| c == n).count();
    let quads = count_of(4);
    let trips = count_of(3);
    let pairs = count_of(2);

    if quads == 1 {
        return HandRank::FourOfAKind;
    }
    if trips == 1 && pairs == 1 {
        return HandRank::FullHouse;
    }
    if flush {
        return HandRank::Flush;
    }
    if straight {
        return HandRank::Straight;
    }
    if trips == 1 {
        return HandRank::ThreeOfAKind;
    }
    if pairs == 2 {
        return HandRank::TwoPair;
    }
    if pairs == 1 && high_pair(&rank_counts) {
        return HandRank::JacksOrBetter;
    }
    HandRank::NoWin
}

/// Validating front door for untrusted input: exactly five cards, no
/// duplicates.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandRank, GameError> {
    let hand: &[Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| GameError::InvalidHandSize(cards.len()))?;
    for (i, c) in hand.iter().enumerate() {
        if hand[..i].contains(c) {
            return Err(GameError::DuplicateCard(*c));
        }
    }
    Ok(evaluate_hand(hand))
}

pub fn is_flush(cards: &[Card; 5]) -> bool {
    let first: Suit = cards[0].suit;
    cards.iter().all(|c| c.suit == first)
}

/// Five consecutive ranks, or the wheel (A-2-3-4-5) with the ace low.
pub fn is_straight(cards: &[Card; 5]) -> bool {
    let mut idx: [u8; 5] = [0; 5];
    for (slot, c) in idx.iter_mut().zip(cards.iter()) {
        *slot = c.rank.index();
    }
    idx.sort_unstable();

    let sequential = idx.windows(2).all(|w| w[1] == w[0] + 1);
    sequential || idx == [0, 1, 2, 3, 12]
}

fn high_pair(rank_counts: &[u8; 13]) -> bool {
    rank_counts
        .iter()
        .enumerate()
        .any(|(i, &n)| n == 2 && i as u8 >= Rank::Jack.index())
}
