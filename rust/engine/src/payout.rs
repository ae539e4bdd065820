use serde::{Deserialize, Serialize};

use crate::hand::HandRank;

/// Paying rows of the Jacks or Better table, best hand first.
pub const PAYOUT_TABLE: [HandRank; 9] = [
    HandRank::RoyalFlush,
    HandRank::StraightFlush,
    HandRank::FourOfAKind,
    HandRank::FullHouse,
    HandRank::Flush,
    HandRank::Straight,
    HandRank::ThreeOfAKind,
    HandRank::TwoPair,
    HandRank::JacksOrBetter,
];

/// Winnings at or above this are a medium win.
pub const MEDIUM_WIN_THRESHOLD: u32 = 25;
/// Winnings at or above this are a large win.
pub const LARGE_WIN_THRESHOLD: u32 = 100;

/// Credits returned for `rank` at the given bet.
pub fn winnings(rank: HandRank, bet: u8) -> u32 {
    rank.multiplier() * u32::from(bet)
}

/// Coarse size of a payout, so presentation layers can pick feedback
/// without knowing poker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutTier {
    /// Nothing won
    None,
    /// 1 to 24 credits
    Small,
    /// 25 to 99 credits
    Medium,
    /// 100 credits or more
    Large,
}

impl PayoutTier {
    pub fn from_winnings(winnings: u32) -> Self {
        match winnings {
            0 => PayoutTier::None,
            w if w >= LARGE_WIN_THRESHOLD => PayoutTier::Large,
            w if w >= MEDIUM_WIN_THRESHOLD => PayoutTier::Medium,
            _ => PayoutTier::Small,
        }
    }
}

/// Result of a completed draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub rank: HandRank,
    pub multiplier: u32,
    pub winnings: u32,
    pub tier: PayoutTier,
}

impl Outcome {
    pub fn new(rank: HandRank, bet: u8) -> Self {
        let winnings = winnings(rank, bet);
        Self {
            rank,
            multiplier: rank.multiplier(),
            winnings,
            tier: PayoutTier::from_winnings(winnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_split_on_thresholds() {
        assert_eq!(PayoutTier::from_winnings(0), PayoutTier::None);
        assert_eq!(PayoutTier::from_winnings(1), PayoutTier::Small);
        assert_eq!(PayoutTier::from_winnings(24), PayoutTier::Small);
        assert_eq!(PayoutTier::from_winnings(25), PayoutTier::Medium);
        assert_eq!(PayoutTier::from_winnings(99), PayoutTier::Medium);
        assert_eq!(PayoutTier::from_winnings(100), PayoutTier::Large);
        assert_eq!(PayoutTier::from_winnings(1250), PayoutTier::Large);
    }

    #[test]
    fn outcome_scales_with_bet() {
        let o = Outcome::new(HandRank::FullHouse, 3);
        assert_eq!(o.multiplier, 9);
        assert_eq!(o.winnings, 27);
        assert_eq!(o.tier, PayoutTier::Medium);

        let royal = Outcome::new(HandRank::RoyalFlush, 1);
        assert_eq!(royal.tier, PayoutTier::Large);
    }

    #[test]
    fn table_lists_every_paying_rank_once() {
        assert!(PAYOUT_TABLE.iter().all(|r| r.is_win()));
        assert!(PAYOUT_TABLE.windows(2).all(|w| w[0] > w[1]));
    }
}
