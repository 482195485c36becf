//! Hands and the rules evaluated over them.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Returns the hand total and whether an ace is still counted as 11.
///
/// Every ace starts at 11 and drops to 1, one at a time, while the total is
/// over 21. Two aces with a ten therefore total 12, not 22.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// A set of cards with a wager.
///
/// Player hands carry the bet placed at the start of the round; the dealer's
/// hand carries none. Totals are recomputed from the cards on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: usize,
    stuck: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            stuck: false,
        }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn with_cards(cards: &[Card], bet: usize) -> Self {
        Self {
            cards: cards.to_vec(),
            bet,
            stuck: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Stops the hand from taking more cards.
    pub const fn stick(&mut self) {
        self.stuck = true;
    }

    /// Returns whether the hand has stopped taking cards.
    #[must_use]
    pub const fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Total of the hand with aces counted as 11 unless that would bust.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns whether the hand is two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    /// Returns whether the hand is two cards of equal blackjack value.
    ///
    /// Ranks are not compared, so a ten and a king may be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.value() == second.value())
    }

    /// Returns whether the hand holds exactly its first two cards.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.cards.len() == 2
    }

    /// Returns whether the hand may still take a card.
    ///
    /// A hand that reaches 21 or busts is stuck here the first time it is
    /// checked.
    pub fn can_be_played(&mut self) -> bool {
        if self.stuck {
            return false;
        }
        if self.total() < BLACKJACK {
            return true;
        }
        self.stick();
        false
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:2} [", self.total())?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
