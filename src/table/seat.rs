//! Seats at the table.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// A seat holding at most one player and the hands played there this round.
///
/// The same player may sit at several seats.
#[derive(Debug, Clone, Default)]
pub struct Seat {
    player: Option<usize>,
    hands: Vec<Hand>,
}

impl Seat {
    /// Creates an empty seat.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: None,
            hands: Vec::new(),
        }
    }

    /// Player sitting here, if any.
    #[must_use]
    pub const fn player(&self) -> Option<usize> {
        self.player
    }

    /// Returns whether a player sits here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.player.is_some()
    }

    /// Hands played at this seat this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub(crate) fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    pub(crate) fn sit(&mut self, player_id: usize) -> Option<usize> {
        self.player.replace(player_id)
    }

    pub(crate) fn vacate(&mut self) -> Option<usize> {
        self.player.take()
    }

    pub(crate) fn place_bet(&mut self, bet: usize) {
        self.hands.push(Hand::new(bet));
    }

    pub(crate) fn clear(&mut self) {
        self.hands.clear();
    }

    /// Moves the second card of hand `index` into a new hand with the same bet.
    ///
    /// Returns the split card, or `None` if the hand does not hold two cards.
    pub(crate) fn split(&mut self, index: usize) -> Option<Card> {
        let hand = self.hands.get_mut(index)?;
        let bet = hand.bet();
        let card = hand.take_split_card()?;
        self.hands.push(Hand::with_cards(&[card], bet));
        Some(card)
    }
}
