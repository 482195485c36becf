//! A multi-deck blackjack shoe simulator with optional `no_std` support.
//!
//! A [`Table`] deals rounds from a cut [`Shoe`]: bets, the initial deal,
//! player decisions (hit, stand, double down, split), the dealer's fixed
//! drawing rules and settlement. Players plug in a [`Strategy`] that sees its
//! hand and the shoe's [`Broadcast`], which carries the running and true
//! counts. [`Game`] owns the roster and plays shoe after shoe.
//!
//! # Example
//!
//! ```
//! use bjsim::{BasicStrategist, Counter, Game, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 42).unwrap();
//! let basic = game.join(BasicStrategist::default(), 10_000);
//! let counter = game.join(Counter::default(), 10_000);
//! game.add_player_to_seat(basic, 0).unwrap();
//! game.add_player_to_seat(counter, 1).unwrap();
//!
//! game.play(3).unwrap();
//! for player in game.players() {
//!     println!("{}: {}", player.name(), player.bank());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod broadcast;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod strategy;
pub mod table;

// Re-export main types
pub use broadcast::{Broadcast, CountingSystem};
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{
    BetError, Decision, OptionsError, RoundError, SeatError, ShoeError, StrategyError,
};
pub use game::Game;
pub use hand::Hand;
pub use options::{RoundingMode, TableOptions};
pub use player::{Player, Strategy, TableView};
pub use result::{HandOutcome, HandResult, PlayerSettlement, RejectedBet, RoundResult};
pub use shoe::Shoe;
pub use strategy::{BasicStrategist, Counter, Mug, Risker, Sticker};
pub use table::{Dealer, RoundPhase, Seat, Table};
