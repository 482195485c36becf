//! The dealer's fixed drawing rules.

use crate::broadcast::Broadcast;
use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// The house hand. Hits 16 or less and soft 17, stands otherwise.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new(0) }
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The first card dealt to the dealer, shown to every player.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the dealer must draw to `hand`.
    #[must_use]
    pub fn should_hit(hand: &Hand) -> bool {
        let total = hand.total();
        total <= 16 || (total == 17 && hand.is_soft())
    }

    /// Draws until the rules say stand, then sticks.
    ///
    /// Returns the number of cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out while the dealer must draw.
    pub fn play(&mut self, shoe: &mut Shoe, broadcast: &mut Broadcast) -> Result<usize, ShoeError> {
        let mut drawn = 0;
        while !self.hand.is_stuck() && Self::should_hit(&self.hand) {
            self.hand.add_card(shoe.next_card(broadcast)?);
            drawn += 1;
        }
        self.hand.stick();
        Ok(drawn)
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) fn clear(&mut self) {
        self.hand = Hand::new(0);
    }
}
