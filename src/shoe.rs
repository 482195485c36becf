//! The shoe dealt from during a session.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::broadcast::Broadcast;
use crate::card::{self, Card};
use crate::error::ShoeError;

/// One position in the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Card(Card),
    CutCard,
}

/// One or more shuffled decks plus an optional cut card.
///
/// Cards only ever leave from the front. When the cut card comes up it is
/// discarded silently and the next real card is dealt instead; callers learn
/// the shoe is spent through [`Shoe::cut_card_reached`].
#[derive(Debug, Clone)]
pub struct Shoe {
    slots: VecDeque<Slot>,
    decks: u8,
}

impl Shoe {
    /// Builds `decks` full decks and shuffles them uniformly.
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(usize::from(decks) * card::DECK_SIZE);
        for _ in 0..decks {
            cards.extend(card::deck());
        }

        cards.shuffle(rng);

        Self {
            slots: cards.into_iter().map(Slot::Card).collect(),
            decks,
        }
    }

    /// Builds an unshuffled shoe dealing `cards` in the given order.
    ///
    /// Useful for replaying a known sequence of cards.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let slots: VecDeque<Slot> = cards.into_iter().map(Slot::Card).collect();
        let decks = slots.len().div_ceil(card::DECK_SIZE).max(1);
        Self {
            slots,
            decks: u8::try_from(decks).unwrap_or(u8::MAX),
        }
    }

    /// Places the cut card `position` cards from the front.
    ///
    /// The first `position` cards keep their order. The card that was last in
    /// the shoe moves to sit directly behind the cut card, so it is the first
    /// card dealt once the cut card has come up; the rest of the tail keeps its
    /// order behind it. Calling this again moves an existing cut card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidPenetration`] unless
    /// `position < cards - 1`.
    pub fn penetrate(&mut self, position: usize) -> Result<(), ShoeError> {
        self.slots.retain(|slot| *slot != Slot::CutCard);

        let cards = self.slots.len();
        if position >= cards.saturating_sub(1) {
            return Err(ShoeError::InvalidPenetration { position, cards });
        }

        let Some(last) = self.slots.pop_back() else {
            return Err(ShoeError::Exhausted);
        };
        self.slots.insert(position, Slot::CutCard);
        self.slots.insert(position + 1, last);

        log::debug!("cut card placed at {position} of {cards}");
        Ok(())
    }

    /// Deals the next card and records it in the broadcast.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] once no physical cards remain.
    pub fn next_card(&mut self, broadcast: &mut Broadcast) -> Result<Card, ShoeError> {
        loop {
            match self.slots.pop_front() {
                Some(Slot::Card(card)) => {
                    log::trace!("dealt {card}");
                    broadcast.record_card(card);
                    return Ok(card);
                }
                Some(Slot::CutCard) => log::debug!("cut card reached"),
                None => return Err(ShoeError::Exhausted),
            }
        }
    }

    /// Returns whether the cut card has already come out of the shoe.
    ///
    /// A shoe that was never penetrated reports `true`.
    #[must_use]
    pub fn cut_card_reached(&self) -> bool {
        !self.slots.contains(&Slot::CutCard)
    }

    /// Number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Number of physical cards left.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Card(_)))
            .count()
    }

    /// Returns whether no physical cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards_remaining() == 0
    }

    /// Remaining cards in deal order, skipping the cut card.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Card(card) => Some(card),
            Slot::CutCard => None,
        })
    }
}
