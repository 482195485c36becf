//! Table configuration options.

use crate::broadcast::CountingSystem;
use crate::card::DECK_SIZE;
use crate::error::{OptionsError, ShoeError};

/// Most seats a table can have.
pub const MAX_SEATS: u8 = 6;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(8)
///     .with_penetration(300)
///     .with_max_bet(Some(500));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of seats (1 to 6).
    pub seats: u8,
    /// Number of decks per shoe.
    pub decks: u8,
    /// Cards dealt before the cut card comes up.
    pub penetration: usize,
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Largest accepted bet, unlimited when `None`.
    pub max_bet: Option<usize>,
    /// Blackjack winnings as a multiple of the bet (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Count published through the broadcast.
    pub counting: CountingSystem,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            seats: MAX_SEATS,
            decks: 6,
            penetration: 250,
            min_bet: 1,
            max_bet: None,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            counting: CountingSystem::HiLo,
        }
    }
}

impl TableOptions {
    /// Checks the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat count is outside 1..=6, there are no
    /// decks, the cut card does not fit in the shoe, or the bet limits are
    /// inconsistent.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.seats == 0 || self.seats > MAX_SEATS {
            return Err(OptionsError::Seats(self.seats));
        }
        if self.decks == 0 {
            return Err(OptionsError::Decks);
        }

        let cards = usize::from(self.decks) * DECK_SIZE;
        if self.penetration >= cards - 1 {
            return Err(ShoeError::InvalidPenetration {
                position: self.penetration,
                cards,
            }
            .into());
        }

        if self.min_bet == 0 || self.max_bet.is_some_and(|max| max < self.min_bet) {
            return Err(OptionsError::BetLimits {
                min: self.min_bet,
                max: self.max_bet,
            });
        }

        Ok(())
    }

    /// Sets the number of seats.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_seats(3);
    /// assert_eq!(options.seats, 3);
    /// ```
    #[must_use]
    pub const fn with_seats(mut self, seats: u8) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets how many cards are dealt before the cut card.
    #[must_use]
    pub const fn with_penetration(mut self, penetration: usize) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_bet(Some(100));
    /// assert_eq!(options.max_bet, Some(100));
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: Option<usize>) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the counting system published through the broadcast.
    #[must_use]
    pub const fn with_counting(mut self, counting: CountingSystem) -> Self {
        self.counting = counting;
        self
    }
}
