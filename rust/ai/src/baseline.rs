//! Baseline hold strategy for Jacks or Better.
//!
//! A short priority list in the spirit of the published simple strategy
//! charts. It is not optimal play, but it keeps every paying hand and
//! chases the usual draws, which puts its return well above discarding
//! everything.

use crate::HoldStrategy;
use jacks_engine::cards::{Card, Rank};
use jacks_engine::hand::{evaluate_hand, HandRank};

/// Rule-based strategy, first matching rule wins:
///
/// 1. Full house or better: hold everything
/// 2. Four to a royal flush, even when it breaks a made flush or straight
/// 3. Pat flush or straight: hold everything
/// 4. Three of a kind or two pair: hold the matched cards
/// 5. High pair (jacks or better)
/// 6. Four to a flush
/// 7. Low pair
/// 8. Four to an open-ended straight
/// 9. Up to two high cards, lowest first
/// 10. Otherwise discard everything
///
/// # Example
///
/// ```rust
/// use jacks_ai::baseline::BaselineStrategy;
/// use jacks_ai::HoldStrategy;
/// use jacks_engine::cards::parse_cards;
///
/// let ai = BaselineStrategy::new();
/// let cards: [_; 5] = parse_cards("Js Jh 2d 5c 9h").unwrap().try_into().unwrap();
/// assert_eq!(ai.choose_holds(&cards), [true, true, false, false, false]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineStrategy;

impl BaselineStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl HoldStrategy for BaselineStrategy {
    fn choose_holds(&self, cards: &[Card; 5]) -> [bool; 5] {
        let rank = evaluate_hand(cards);
        if rank >= HandRank::FullHouse {
            return [true; 5];
        }
        if let Some(mask) = four_to_royal(cards) {
            return mask;
        }
        if rank >= HandRank::Straight {
            return [true; 5];
        }
        if matches!(rank, HandRank::ThreeOfAKind | HandRank::TwoPair) {
            return mask_where(cards, |c| rank_count(cards, c.rank) >= 2);
        }
        if rank == HandRank::JacksOrBetter {
            return mask_where(cards, |c| rank_count(cards, c.rank) == 2);
        }
        if let Some(mask) = four_to_flush(cards) {
            return mask;
        }
        if cards.iter().any(|c| rank_count(cards, c.rank) == 2) {
            return mask_where(cards, |c| rank_count(cards, c.rank) == 2);
        }
        if let Some(mask) = open_ended_four(cards) {
            return mask;
        }
        lowest_high_cards(cards)
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

fn mask_where(cards: &[Card; 5], keep: impl Fn(&Card) -> bool) -> [bool; 5] {
    let mut mask = [false; 5];
    for (m, c) in mask.iter_mut().zip(cards.iter()) {
        *m = keep(c);
    }
    mask
}

fn rank_count(cards: &[Card; 5], rank: Rank) -> usize {
    cards.iter().filter(|c| c.rank == rank).count()
}

fn four_to_royal(cards: &[Card; 5]) -> Option<[bool; 5]> {
    cards.iter().find_map(|anchor| {
        let mask = mask_where(cards, |c| c.suit == anchor.suit && c.rank >= Rank::Ten);
        (mask.iter().filter(|&&m| m).count() == 4).then_some(mask)
    })
}

fn four_to_flush(cards: &[Card; 5]) -> Option<[bool; 5]> {
    cards.iter().find_map(|anchor| {
        let mask = mask_where(cards, |c| c.suit == anchor.suit);
        (mask.iter().filter(|&&m| m).count() == 4).then_some(mask)
    })
}

/// Four consecutive ranks that can be completed at either end. 2-3-4-5
/// counts (an ace or a six fills it); J-Q-K-A does not.
fn open_ended_four(cards: &[Card; 5]) -> Option<[bool; 5]> {
    // lowest card of the run: Two (0) up to Ten (8), so the top stays below the ace
    for low in 0u8..=8 {
        let mut mask = [false; 5];
        let mut found = 0;
        for idx in low..low + 4 {
            if let Some(pos) = cards.iter().position(|c| c.rank.index() == idx) {
                mask[pos] = true;
                found += 1;
            }
        }
        if found == 4 {
            return Some(mask);
        }
    }
    None
}

fn lowest_high_cards(cards: &[Card; 5]) -> [bool; 5] {
    let mut high: Vec<(Rank, usize)> = cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.rank.is_high())
        .map(|(i, c)| (c.rank, i))
        .collect();
    high.sort_unstable();
    let mut mask = [false; 5];
    for &(_, i) in high.iter().take(2) {
        mask[i] = true;
    }
    mask
}
