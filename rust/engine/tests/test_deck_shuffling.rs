use std::collections::{HashMap, HashSet};

use jacks_engine::cards::{all_ranks, all_suits, full_deck, Card, Rank, Suit};
use jacks_engine::deck::{shuffle, Deck};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn full_deck_has_52_unique_cards_in_suit_major_order() {
    let cards = full_deck();
    assert_eq!(cards.len(), 52);
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52);
    for s in all_suits() {
        for r in all_ranks() {
            assert!(set.contains(&Card::new(r, s)), "missing {:?} {:?}", r, s);
        }
    }
    assert_eq!(cards[0], Card::new(Rank::Two, Suit::Spades));
    assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(cards[13], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Clubs));
}

#[test]
fn unshuffled_deck_deals_in_construction_order() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for (i, expected) in full_deck().into_iter().enumerate() {
        let c = deck.deal_card().expect("should have 52 cards");
        assert_eq!(c, expected, "position {}", i);
        assert!(set.insert(c));
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.deal_top(10).unwrap(),
        d2.deal_top(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_restores_a_full_shoe() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    deck.deal_top(30).unwrap();
    assert_eq!(deck.remaining(), 22);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let set: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn deal_top_takes_from_the_front() {
    let mut deck = Deck::new_with_seed(77);
    deck.shuffle();
    let top: Vec<Card> = deck.cards()[..5].to_vec();
    assert_eq!(deck.deal_top(5).unwrap(), top);
    assert_eq!(deck.remaining(), 47);
    assert!(deck.cards().iter().all(|c| !top.contains(c)));
}

#[test]
fn low_water_mark_is_ten() {
    let mut deck = Deck::new_with_seed(8);
    deck.deal_top(42).unwrap();
    assert!(!deck.is_below_low_water());
    deck.deal_card();
    assert!(deck.is_below_low_water());
}

#[test]
fn shuffle_is_uniform_over_small_permutations() {
    const ROUNDS: usize = 48_000;
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut counts: HashMap<[u8; 4], usize> = HashMap::new();
    for _ in 0..ROUNDS {
        let mut items = [0u8, 1, 2, 3];
        shuffle(&mut items, &mut rng);
        *counts.entry(items).or_default() += 1;
    }

    assert_eq!(counts.len(), 24, "every ordering of four items must occur");
    // expected 2000 each, standard deviation about 44
    let expected = ROUNDS / 24;
    for (perm, &n) in &counts {
        assert!(
            n.abs_diff(expected) < expected / 10,
            "{:?} seen {} times, expected about {}",
            perm,
            n,
            expected
        );
    }
}
