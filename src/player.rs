//! Players, their bank ledger, and the strategy plug-in point.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::broadcast::Broadcast;
use crate::error::{Decision, StrategyError};
use crate::hand::Hand;

/// Everything a strategy may look at when deciding.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// Public per-shoe information.
    pub broadcast: &'a Broadcast,
    /// The deciding player's bank.
    pub bank: usize,
}

fn unimplemented(strategy: &str, decision: Decision) -> StrategyError {
    StrategyError::Unimplemented {
        strategy: strategy.to_owned(),
        decision,
    }
}

/// Decision-making for a seated player.
///
/// Every decision has a default that fails with
/// [`StrategyError::Unimplemented`]; a strategy overrides the ones it plays.
/// Decisions must depend only on the hand and the [`TableView`].
///
/// # Example
///
/// ```
/// use bjsim::{Hand, Strategy, StrategyError, TableView};
///
/// struct FlatHitter;
///
/// impl Strategy for FlatHitter {
///     fn name(&self) -> &str {
///         "FlatHitter"
///     }
///
///     fn bet(&self, _view: &TableView<'_>) -> Result<usize, StrategyError> {
///         Ok(10)
///     }
///
///     fn wants_to_split(&self, _: &Hand, _: &TableView<'_>) -> Result<bool, StrategyError> {
///         Ok(false)
///     }
///
///     fn wants_to_double_down(&self, _: &Hand, _: &TableView<'_>) -> Result<bool, StrategyError> {
///         Ok(false)
///     }
///
///     fn wants_to_hit(&self, hand: &Hand, _: &TableView<'_>) -> Result<bool, StrategyError> {
///         Ok(hand.total() < 17)
///     }
/// }
/// ```
pub trait Strategy {
    /// Display name used in logs and errors.
    fn name(&self) -> &str;

    /// Size of the bet for the next round. Zero sits the round out.
    ///
    /// # Errors
    ///
    /// Fails if the strategy does not implement betting.
    fn bet(&self, view: &TableView<'_>) -> Result<usize, StrategyError> {
        let _ = view;
        Err(unimplemented(self.name(), Decision::Bet))
    }

    /// Whether to split `hand`. Only asked when the hand can be split.
    ///
    /// # Errors
    ///
    /// Fails if the strategy does not implement splitting.
    fn wants_to_split(&self, hand: &Hand, view: &TableView<'_>) -> Result<bool, StrategyError> {
        let _ = (hand, view);
        Err(unimplemented(self.name(), Decision::Split))
    }

    /// Whether to double down on `hand`. Only asked on two-card hands.
    ///
    /// # Errors
    ///
    /// Fails if the strategy does not implement doubling.
    fn wants_to_double_down(
        &self,
        hand: &Hand,
        view: &TableView<'_>,
    ) -> Result<bool, StrategyError> {
        let _ = (hand, view);
        Err(unimplemented(self.name(), Decision::DoubleDown))
    }

    /// Whether to take another card on `hand`.
    ///
    /// # Errors
    ///
    /// Fails if the strategy does not implement hitting.
    fn wants_to_hit(&self, hand: &Hand, view: &TableView<'_>) -> Result<bool, StrategyError> {
        let _ = (hand, view);
        Err(unimplemented(self.name(), Decision::Hit))
    }
}

/// A bank roll driven by a [`Strategy`].
///
/// Bets placed during a round are escrowed in `round_betting` and winnings
/// accrue in `payout`; the bank only moves when the round is settled.
pub struct Player {
    strategy: Box<dyn Strategy>,
    bank: usize,
    bank_history: Vec<usize>,
    round_betting: usize,
    payout: usize,
}

impl Player {
    /// Creates a player with a starting bank.
    pub fn new(strategy: impl Strategy + 'static, bank: usize) -> Self {
        Self::from_boxed(Box::new(strategy), bank)
    }

    /// Creates a player from an already boxed strategy.
    #[must_use]
    pub fn from_boxed(strategy: Box<dyn Strategy>, bank: usize) -> Self {
        Self {
            strategy,
            bank,
            bank_history: alloc::vec![bank],
            round_betting: 0,
            payout: 0,
        }
    }

    /// Name of the player's strategy.
    #[must_use]
    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    /// The player's strategy.
    #[must_use]
    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Current bank.
    #[must_use]
    pub const fn bank(&self) -> usize {
        self.bank
    }

    /// Bank after every settlement, starting with the initial bank.
    #[must_use]
    pub fn bank_history(&self) -> &[usize] {
        &self.bank_history
    }

    /// Amount escrowed this round.
    #[must_use]
    pub const fn round_betting(&self) -> usize {
        self.round_betting
    }

    /// Winnings accrued this round, stakes included.
    #[must_use]
    pub const fn payout(&self) -> usize {
        self.payout
    }

    /// Bank not yet escrowed this round.
    #[must_use]
    pub const fn available(&self) -> usize {
        self.bank.saturating_sub(self.round_betting)
    }

    /// Builds the view handed to the strategy.
    #[must_use]
    pub const fn view<'a>(&self, broadcast: &'a Broadcast) -> TableView<'a> {
        TableView {
            broadcast,
            bank: self.bank,
        }
    }

    pub(crate) const fn escrow(&mut self, amount: usize) {
        self.round_betting += amount;
    }

    pub(crate) const fn add_payout(&mut self, amount: usize) {
        self.payout += amount;
    }

    /// Drops the round's escrow and payout without touching the bank.
    pub(crate) const fn void_round(&mut self) {
        self.payout = 0;
        self.round_betting = 0;
    }

    /// Moves the round's payout and escrow into the bank.
    ///
    /// Records the new bank in the history and returns it.
    pub fn settle_round(&mut self) -> usize {
        self.bank = (self.bank + self.payout).saturating_sub(self.round_betting);
        self.payout = 0;
        self.round_betting = 0;
        self.bank_history.push(self.bank);
        self.bank
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("strategy", &self.name())
            .field("bank", &self.bank)
            .field("round_betting", &self.round_betting)
            .field("payout", &self.payout)
            .field("rounds", &self.bank_history.len().saturating_sub(1))
            .finish()
    }
}
