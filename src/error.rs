//! Error types for table and game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No physical cards are left in the shoe.
    #[error("no cards left in the shoe")]
    Exhausted,
    /// The cut card cannot be placed at this position.
    #[error("cannot place the cut card at position {position} in a shoe of {cards} cards")]
    InvalidPenetration {
        /// Requested cut position.
        position: usize,
        /// Physical cards in the shoe.
        cards: usize,
    },
}

/// Reasons a bet is refused; the seat sits out the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The player cannot cover the bet.
    #[error("bet of {bet} exceeds the {available} available")]
    InsufficientFunds {
        /// Requested bet.
        bet: usize,
        /// Bank not already escrowed this round.
        available: usize,
    },
    /// Bet is under the table minimum.
    #[error("bet of {bet} is below the table minimum of {min}")]
    BelowMinimum {
        /// Requested bet.
        bet: usize,
        /// Table minimum.
        min: usize,
    },
    /// Bet is over the table maximum.
    #[error("bet of {bet} is above the table maximum of {max}")]
    AboveMaximum {
        /// Requested bet.
        bet: usize,
        /// Table maximum.
        max: usize,
    },
}

/// Errors raised when seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Seat index is past the last seat.
    #[error("seat {index} does not exist at a table of {seats} seats")]
    OutOfRange {
        /// Requested seat index.
        index: usize,
        /// Number of seats at the table.
        seats: usize,
    },
    /// Player not found.
    #[error("player {0} not found")]
    UnknownPlayer(usize),
}

/// The decision a strategy was asked to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Bet sizing.
    Bet,
    /// Split a pair.
    Split,
    /// Double down.
    DoubleDown,
    /// Hit or stand.
    Hit,
}

/// Errors raised by player strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy does not answer this decision.
    #[error("strategy `{strategy}` does not implement the {decision:?} decision")]
    Unimplemented {
        /// Name of the strategy.
        strategy: String,
        /// The unanswered decision.
        decision: Decision,
    },
}

/// Errors that abort a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The shoe ran out of physical cards mid-round.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    /// A seated strategy failed to decide.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    /// A seat refers to a player missing from the roster.
    #[error("player {0} not found")]
    UnknownPlayer(usize),
}

/// Errors raised by invalid table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Seat count outside 1..=6.
    #[error("a table has between 1 and 6 seats, not {0}")]
    Seats(u8),
    /// Zero decks.
    #[error("a shoe needs at least one deck")]
    Decks,
    /// Cut card too deep for the shoe.
    #[error(transparent)]
    Penetration(#[from] ShoeError),
    /// Minimum bet is zero or above the maximum.
    #[error("invalid bet limits: minimum {min}, maximum {max:?}")]
    BetLimits {
        /// Table minimum.
        min: usize,
        /// Table maximum.
        max: Option<usize>,
    },
}
