//! The table and its round state machine.

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::broadcast::Broadcast;
use crate::error::{OptionsError, RoundError, SeatError, ShoeError};
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::{RejectedBet, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
pub mod dealer;
mod seat;
mod settle;
pub mod state;

pub use dealer::Dealer;
pub use seat::Seat;
pub use state::RoundPhase;

/// A blackjack table: seats, a dealer, a shoe and the broadcast for that shoe.
///
/// The table does not own players. Seats hold indices into the roster passed
/// to [`Table::next_round`], so one player may sit at several seats.
#[derive(Debug)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Cards left in the current shoe.
    shoe: Shoe,
    /// Public information for the current shoe.
    broadcast: Broadcast,
    /// The dealer.
    dealer: Dealer,
    /// Seats in dealing order.
    seats: Vec<Seat>,
    /// Phase of the current round.
    phase: RoundPhase,
    /// Shoes started since the table opened.
    shoes: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Opens a table with a freshly shuffled and cut shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default().with_seats(3), 42).unwrap();
    /// assert_eq!(table.seats().len(), 3);
    /// assert!(!table.shoe().cut_card_reached());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TableOptions::validate`].
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng);
        let seats = (0..options.seats).map(|_| Seat::new()).collect();

        let mut table = Self {
            broadcast: Broadcast::new(options.counting),
            dealer: Dealer::new(),
            shoe,
            seats,
            phase: RoundPhase::Waiting,
            shoes: 0,
            rng,
            options,
        };
        table.start_shoe()?;
        Ok(table)
    }

    /// Replaces the shoe with a freshly shuffled one and resets the broadcast.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured penetration does not fit the shoe.
    pub fn new_shoe(&mut self) -> Result<(), ShoeError> {
        self.shoe = Shoe::new(self.options.decks, &mut self.rng);
        self.start_shoe()
    }

    /// Swaps in a prepared shoe, as dealt, and resets the broadcast.
    ///
    /// The shoe is used as given; cut it first with [`Shoe::penetrate`] if
    /// rounds should stop before it runs out.
    pub fn set_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
        self.broadcast.reset(self.shoe.cards_remaining());
        self.phase = RoundPhase::Waiting;
        self.shoes += 1;
    }

    fn start_shoe(&mut self) -> Result<(), ShoeError> {
        self.shoe.penetrate(self.options.penetration)?;
        self.broadcast.reset(self.shoe.cards_remaining());
        self.phase = RoundPhase::Waiting;
        self.shoes += 1;
        log::info!(
            "shoe {} started: {} decks, cut card after {} cards",
            self.shoes,
            self.options.decks,
            self.options.penetration
        );
        Ok(())
    }

    /// Seats a player.
    ///
    /// Returns the player previously sitting there, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat index is past the last seat.
    pub fn sit(&mut self, player_id: usize, seat: usize) -> Result<Option<usize>, SeatError> {
        let seats = self.seats.len();
        self.seats
            .get_mut(seat)
            .map(|s| s.sit(player_id))
            .ok_or(SeatError::OutOfRange { index: seat, seats })
    }

    /// Empties a seat, returning the player who sat there.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat index is past the last seat.
    pub fn vacate(&mut self, seat: usize) -> Result<Option<usize>, SeatError> {
        let seats = self.seats.len();
        self.seats
            .get_mut(seat)
            .map(Seat::vacate)
            .ok_or(SeatError::OutOfRange { index: seat, seats })
    }

    /// Distinct seated players in seat order.
    #[must_use]
    pub fn seated_players(&self) -> Vec<usize> {
        let mut players = Vec::new();
        for player_id in self.seats.iter().filter_map(Seat::player) {
            if !players.contains(&player_id) {
                players.push(player_id);
            }
        }
        players
    }

    /// Plays one full round: bet, deal, player actions, dealer, settle.
    ///
    /// A started round always runs to completion, even past the cut card.
    /// If it fails, escrowed bets are returned and the table is left in
    /// [`RoundPhase::Aborted`].
    ///
    /// # Errors
    ///
    /// Returns an error if a seat refers to a player missing from `players`,
    /// a strategy fails to decide, or the shoe runs out of physical cards.
    pub fn next_round(&mut self, players: &mut [Player]) -> Result<RoundResult, RoundError> {
        let seated = self.seated_players();
        let mut banks_before = Vec::with_capacity(seated.len());
        for &player_id in &seated {
            let player = players
                .get(player_id)
                .ok_or(RoundError::UnknownPlayer(player_id))?;
            banks_before.push((player_id, player.bank()));
        }

        match self.play_round(players) {
            Ok(rejected_bets) => Ok(self.settle(players, rejected_bets, &banks_before)),
            Err(err) => {
                log::warn!("round aborted: {err}");
                for &player_id in &seated {
                    if let Some(player) = players.get_mut(player_id) {
                        player.void_round();
                    }
                }
                self.phase = RoundPhase::Aborted;
                Err(err)
            }
        }
    }

    fn play_round(&mut self, players: &mut [Player]) -> Result<Vec<RejectedBet>, RoundError> {
        self.clean();
        let rejected_bets = self.take_bets(players)?;
        self.deal()?;
        self.player_actions(players)?;
        self.dealer_action()?;
        Ok(rejected_bets)
    }

    fn enter(&mut self, phase: RoundPhase) {
        log::trace!("{:?} -> {phase:?}", self.phase);
        self.phase = phase;
    }

    /// Table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The current shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Public information for the current shoe.
    #[must_use]
    pub const fn broadcast(&self) -> &Broadcast {
        &self.broadcast
    }

    /// The dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Seats in dealing order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Phase of the current or last round.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Shoes started since the table opened, including the current one.
    #[must_use]
    pub const fn shoes_started(&self) -> usize {
        self.shoes
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dealer   :   {}", self.dealer.hand())?;
        for (s, seat) in self.seats.iter().enumerate() {
            for (h, hand) in seat.hands().iter().enumerate() {
                writeln!(f, "Seat {s}.{h} :   {hand}")?;
            }
        }
        Ok(())
    }
}
