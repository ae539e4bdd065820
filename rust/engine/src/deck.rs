use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::rules::LOW_WATER_MARK;

/// In-place Fisher-Yates shuffle: walking from the last index down to 1,
/// swap each element with a uniformly chosen element at or below it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// The shoe: remaining cards in deal order plus the RNG that shuffles them.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep construction order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Replaces whatever is left with a freshly shuffled 52-card shoe.
    pub fn shuffle(&mut self) {
        self.replenish(&[]);
    }

    /// Starts a new shuffled shoe that leaves out `in_play`, so cards still
    /// sitting in the hand cannot show up twice.
    pub fn replenish(&mut self, in_play: &[Card]) {
        let mut cards = full_deck();
        cards.retain(|c| !in_play.contains(c));
        shuffle(&mut cards, &mut self.rng);
        self.cards = cards;
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = *self.cards.get(self.position)?;
        self.position += 1;
        Some(c)
    }

    /// Removes and returns the top `n` cards. Fails without consuming
    /// anything when fewer than `n` remain.
    pub fn deal_top(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_below_low_water(&self) -> bool {
        self.remaining() < LOW_WATER_MARK
    }

    /// Undealt cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
