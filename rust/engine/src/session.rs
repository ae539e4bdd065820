use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::GameEvent;
use crate::hand::evaluate_hand;
use crate::payout::Outcome;
use crate::rules::{check_can_deal, clamp_bet, DEFAULT_STARTING_CREDITS, HAND_SIZE, MIN_BET};

/// Where the session is in the deal/hold/draw cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for a bet and a deal
    Betting,
    /// Five cards are out; the player picks holds before drawing
    Holding,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Betting => f.write_str("betting"),
            Phase::Holding => f.write_str("holding"),
        }
    }
}

/// One occupied hand position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub card: Card,
    pub held: bool,
}

/// A player action, for callers that prefer a single dispatch point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SetBet(i64),
    BetUp,
    BetDown,
    Deal,
    ToggleHold(usize),
    Draw,
}

/// Construction parameters for [`GameSession`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SessionOptions {
    /// Shuffle seed; `None` picks a random one.
    pub seed: Option<u64>,
    pub starting_credits: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seed: None,
            starting_credits: DEFAULT_STARTING_CREDITS,
        }
    }
}

/// A single player's video poker session: credits, bet, the five-slot hand
/// and the shoe they are dealt from.
///
/// Every action takes `&mut self` and either applies completely, returning
/// the events it produced, or fails and leaves the session untouched.
///
/// # Examples
///
/// ```
/// use jacks_engine::session::{GameSession, Phase, SessionOptions};
///
/// let mut session = GameSession::new(SessionOptions {
///     seed: Some(12345),
///     starting_credits: 100,
/// });
///
/// session.set_bet(5).unwrap();
/// let dealt = session.deal().unwrap();
/// assert_eq!(dealt.len(), 5);
/// assert_eq!(session.credits(), 95);
/// assert_eq!(session.phase(), Phase::Holding);
///
/// session.toggle_hold(0).unwrap();
/// session.draw().unwrap();
/// assert_eq!(session.phase(), Phase::Betting);
/// let outcome = session.last_outcome().unwrap();
/// assert_eq!(session.credits(), 95 + outcome.winnings);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    deck: Deck,
    seed: u64,
    credits: u32,
    bet: u8,
    phase: Phase,
    hand: [Option<Slot>; HAND_SIZE],
    last_outcome: Option<Outcome>,
    hands_played: u64,
}

impl GameSession {
    pub fn new(options: SessionOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Self {
            deck,
            seed,
            credits: options.starting_credits,
            bet: MIN_BET,
            phase: Phase::Betting,
            hand: [None; HAND_SIZE],
            last_outcome: None,
            hands_played: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn credits(&self) -> u32 {
        self.credits
    }
    pub fn bet(&self) -> u8 {
        self.bet
    }
    pub fn hand(&self) -> &[Option<Slot>; HAND_SIZE] {
        &self.hand
    }
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    /// Undealt cards, top first.
    pub fn deck_cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Cards currently in the hand, in slot order.
    pub fn hand_cards(&self) -> Vec<Card> {
        self.hand.iter().flatten().map(|s| s.card).collect()
    }

    pub fn held_mask(&self) -> [bool; HAND_SIZE] {
        self.hand.map(|s| s.is_some_and(|s| s.held))
    }

    /// Sets the wager, clamped to the allowed range. Returns the bet now in
    /// effect.
    pub fn set_bet(&mut self, requested: i64) -> Result<u8, GameError> {
        self.require(Phase::Betting, "change the bet")?;
        self.bet = clamp_bet(requested);
        Ok(self.bet)
    }

    pub fn bet_up(&mut self) -> Result<u8, GameError> {
        self.set_bet(i64::from(self.bet) + 1)
    }

    pub fn bet_down(&mut self) -> Result<u8, GameError> {
        self.set_bet(i64::from(self.bet) - 1)
    }

    /// Takes the bet and deals five fresh cards, none held.
    pub fn deal(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.require(Phase::Betting, "deal")?;
        check_can_deal(self.credits, self.bet)?;
        let cards = self.deck.deal_top(HAND_SIZE)?;

        self.credits -= u32::from(self.bet);
        self.last_outcome = None;
        self.phase = Phase::Holding;

        let mut events = Vec::with_capacity(HAND_SIZE + 1);
        for (slot, (pos, card)) in self.hand.iter_mut().zip(cards.into_iter().enumerate()) {
            *slot = Some(Slot { card, held: false });
            events.push(GameEvent::CardDealt { slot: pos, card });
        }
        self.replenish_if_low(&mut events);
        Ok(events)
    }

    pub fn toggle_hold(&mut self, slot: usize) -> Result<Vec<GameEvent>, GameError> {
        self.require(Phase::Holding, "hold")?;
        let entry = self
            .hand
            .get_mut(slot)
            .and_then(Option::as_mut)
            .ok_or(GameError::InvalidSlot { slot })?;
        entry.held = !entry.held;
        Ok(vec![GameEvent::HoldToggled {
            slot,
            held: entry.held,
        }])
    }

    /// Toggles whichever slots differ so the held flags match `mask`.
    pub fn set_holds(&mut self, mask: [bool; HAND_SIZE]) -> Result<Vec<GameEvent>, GameError> {
        self.require(Phase::Holding, "hold")?;
        let current = self.held_mask();
        let mut events = Vec::new();
        for slot in (0..HAND_SIZE).filter(|&i| current[i] != mask[i]) {
            events.extend(self.toggle_hold(slot)?);
        }
        Ok(events)
    }

    /// Replaces every card not held, scores the hand and pays it.
    pub fn draw(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.require(Phase::Holding, "draw")?;
        let mut slots = Vec::with_capacity(HAND_SIZE);
        for s in self.hand {
            slots.push(s.ok_or(GameError::InvalidPhase {
                action: "draw",
                phase: self.phase,
            })?);
        }
        let discards = slots.iter().filter(|s| !s.held).count();
        let mut replacements = self.deck.deal_top(discards)?.into_iter();

        let mut events = Vec::with_capacity(discards + 2);
        for (pos, slot) in slots.iter_mut().enumerate() {
            if slot.held {
                continue;
            }
            if let Some(card) = replacements.next() {
                slot.card = card;
                events.push(GameEvent::CardDealt { slot: pos, card });
            }
        }

        let final_cards: [Card; HAND_SIZE] = std::array::from_fn(|i| slots[i].card);
        let outcome = Outcome::new(evaluate_hand(&final_cards), self.bet);

        for (dst, src) in self.hand.iter_mut().zip(slots) {
            *dst = Some(src);
        }
        self.credits = self.credits.saturating_add(outcome.winnings);
        self.last_outcome = Some(outcome);
        self.hands_played += 1;
        self.phase = Phase::Betting;

        events.push(GameEvent::DrawResolved {
            outcome,
            credits: self.credits,
        });
        self.replenish_if_low(&mut events);
        Ok(events)
    }

    pub fn apply(&mut self, action: Action) -> Result<Vec<GameEvent>, GameError> {
        match action {
            Action::SetBet(n) => self.set_bet(n).map(|_| Vec::new()),
            Action::BetUp => self.bet_up().map(|_| Vec::new()),
            Action::BetDown => self.bet_down().map(|_| Vec::new()),
            Action::Deal => self.deal(),
            Action::ToggleHold(slot) => self.toggle_hold(slot),
            Action::Draw => self.draw(),
        }
    }

    fn require(&self, phase: Phase, action: &'static str) -> Result<(), GameError> {
        if self.phase != phase {
            return Err(GameError::InvalidPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn replenish_if_low(&mut self, events: &mut Vec<GameEvent>) {
        if self.deck.is_below_low_water() {
            let in_play = self.hand_cards();
            self.deck.replenish(&in_play);
            events.push(GameEvent::ShoeReplenished {
                remaining: self.deck.remaining(),
            });
        }
    }
}
