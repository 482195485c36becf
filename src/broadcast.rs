//! Public information shared with every player at the table.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};

/// Card counting system used for the running count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CountingSystem {
    /// Hi-Lo: 2-6 count +1, 10s and aces count -1.
    #[default]
    HiLo,
    /// Knock-out: like Hi-Lo but 7s also count +1 (unbalanced).
    Ko,
    /// Hi-Opt I: 3-6 count +1, 10s count -1, aces are neutral.
    HiOptI,
    /// Hi-Opt II: two-level count, aces neutral.
    HiOptII,
    /// Omega II: two-level count, 9s count -1, aces neutral.
    OmegaII,
    /// Zen count: two-level count, aces count -1.
    Zen,
}

impl CountingSystem {
    /// Weight of a card under this counting system.
    #[must_use]
    pub const fn weight(self, card: &Card) -> i32 {
        let value = card.value();
        match self {
            Self::HiLo => match value {
                2..=6 => 1,
                10 | 11 => -1,
                _ => 0,
            },
            Self::Ko => match value {
                2..=7 => 1,
                10 | 11 => -1,
                _ => 0,
            },
            Self::HiOptI => match value {
                3..=6 => 1,
                10 => -1,
                _ => 0,
            },
            Self::HiOptII => match value {
                2 | 3 | 6 | 7 => 1,
                4 | 5 => 2,
                10 => -2,
                _ => 0,
            },
            Self::OmegaII => match value {
                2 | 3 | 7 => 1,
                4..=6 => 2,
                9 => -1,
                10 => -2,
                _ => 0,
            },
            Self::Zen => match value {
                2 | 3 | 7 => 1,
                4..=6 => 2,
                10 => -2,
                11 => -1,
                _ => 0,
            },
        }
    }
}

/// Per-shoe state visible to all players.
///
/// The table writes to the broadcast while dealing; strategies only ever
/// receive it by shared reference.
#[derive(Debug, Clone, Default)]
pub struct Broadcast {
    system: CountingSystem,
    history: Vec<Card>,
    running_count: i32,
    dealer_upcard: u8,
    shoe_size: usize,
}

impl Broadcast {
    /// Creates an empty broadcast counting with `system`.
    #[must_use]
    pub const fn new(system: CountingSystem) -> Self {
        Self {
            system,
            history: Vec::new(),
            running_count: 0,
            dealer_upcard: 0,
            shoe_size: 0,
        }
    }

    /// Clears history, count and dealer up-card for a fresh shoe of `cards` cards.
    pub fn reset(&mut self, cards: usize) {
        self.history.clear();
        self.running_count = 0;
        self.dealer_upcard = 0;
        self.shoe_size = cards;
    }

    /// Records a card dealt face up from the shoe.
    pub fn record_card(&mut self, card: Card) {
        self.running_count += self.system.weight(&card);
        self.history.push(card);
    }

    /// Records the blackjack value of the dealer's up-card.
    pub const fn set_dealer_upcard(&mut self, value: u8) {
        self.dealer_upcard = value;
    }

    /// Blackjack value of the dealer's up-card (ace = 11), 0 before the deal.
    #[must_use]
    pub const fn dealer_upcard(&self) -> u8 {
        self.dealer_upcard
    }

    /// Returns whether the dealer is showing an ace.
    #[must_use]
    pub const fn dealer_shows_ace(&self) -> bool {
        self.dealer_upcard == 11
    }

    /// The counting system in use.
    #[must_use]
    pub const fn system(&self) -> CountingSystem {
        self.system
    }

    /// Running count since the last reset.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Every card seen since the last reset, in draw order.
    #[must_use]
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// Number of cards seen since the last reset.
    #[must_use]
    pub fn cards_seen(&self) -> usize {
        self.history.len()
    }

    /// Estimated number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe_size.saturating_sub(self.history.len())
    }

    /// Whole decks remaining, never less than one.
    #[must_use]
    pub fn decks_remaining(&self) -> usize {
        (self.cards_remaining() / DECK_SIZE).max(1)
    }

    /// Running count divided by the whole decks remaining.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "deck counts are far below f64 precision limits"
    )]
    pub fn true_count(&self) -> f64 {
        f64::from(self.running_count) / self.decks_remaining() as f64
    }
}
