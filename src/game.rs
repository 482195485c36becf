//! The driver that plays rounds shoe after shoe.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{OptionsError, RoundError, SeatError, ShoeError};
use crate::options::TableOptions;
use crate::player::{Player, Strategy};
use crate::result::RoundResult;
use crate::table::Table;

/// A table and the roster of players who may sit at it.
///
/// Player ids are indices into the roster, handed out by [`Game::join`].
///
/// # Example
///
/// ```
/// use bjsim::{Game, Sticker, TableOptions};
///
/// let mut game = Game::new(TableOptions::default(), 7).unwrap();
/// let id = game.join(Sticker::default(), 10_000);
/// game.add_player_to_seat(id, 0).unwrap();
///
/// game.play(2).unwrap();
/// assert!(game.player(id).unwrap().bank_history().len() > 1);
/// ```
#[derive(Debug)]
pub struct Game {
    table: Table,
    players: Vec<Player>,
}

impl Game {
    /// Opens a table with the given options and seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TableOptions::validate`].
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        Ok(Self {
            table: Table::new(options, seed)?,
            players: Vec::new(),
        })
    }

    /// Adds a player to the roster and returns their id.
    pub fn join(&mut self, strategy: impl Strategy + 'static, bank: usize) -> usize {
        self.join_boxed(Box::new(strategy), bank)
    }

    /// Adds a player with an already boxed strategy and returns their id.
    pub fn join_boxed(&mut self, strategy: Box<dyn Strategy>, bank: usize) -> usize {
        self.players.push(Player::from_boxed(strategy, bank));
        self.players.len() - 1
    }

    /// Seats a roster player, replacing whoever sat there.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on the roster or the seat does
    /// not exist.
    pub fn add_player_to_seat(&mut self, player_id: usize, seat: usize) -> Result<(), SeatError> {
        if player_id >= self.players.len() {
            return Err(SeatError::UnknownPlayer(player_id));
        }
        if let Some(previous) = self.table.sit(player_id, seat)? {
            log::debug!("seat {seat}: player {previous} replaced by {player_id}");
        }
        Ok(())
    }

    /// Empties a seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat does not exist.
    pub fn remove_player_from_seat(&mut self, seat: usize) -> Result<Option<usize>, SeatError> {
        self.table.vacate(seat)
    }

    /// A roster player.
    #[must_use]
    pub fn player(&self, player_id: usize) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Every roster player, seated or not.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// The table, for swapping in prepared shoes.
    pub const fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Plays a single round with the seated players.
    ///
    /// # Errors
    ///
    /// See [`Table::next_round`].
    pub fn next_round(&mut self) -> Result<RoundResult, RoundError> {
        self.table.next_round(&mut self.players)
    }

    /// Plays rounds until the cut card comes up, then starts a new shoe.
    ///
    /// A round that runs out of physical cards is voided and ends the shoe
    /// early. Returns the number of rounds completed.
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy fails, a seat refers to an unknown
    /// player, or the new shoe cannot be cut.
    pub fn play_shoe(&mut self) -> Result<usize, RoundError> {
        let mut rounds = 0;
        while !self.table.shoe().cut_card_reached() {
            match self.next_round() {
                Ok(_) => {}
                Err(RoundError::Shoe(ShoeError::Exhausted)) => {
                    log::warn!("shoe ran out mid-round, round voided");
                    break;
                }
                Err(err) => return Err(err),
            }
            rounds += 1;
            log::debug!("round {rounds}\n{}", self.table);
            for player in &self.players {
                log::debug!("{}: {}", player.name(), player.bank());
            }
        }
        log::info!(
            "shoe {} done after {rounds} rounds",
            self.table.shoes_started()
        );
        self.table.new_shoe()?;
        Ok(rounds)
    }

    /// Plays `shoes` full shoes. Returns the total number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Game::play_shoe`].
    pub fn play(&mut self, shoes: usize) -> Result<usize, RoundError> {
        let mut rounds = 0;
        for _ in 0..shoes {
            rounds += self.play_shoe()?;
        }
        Ok(rounds)
    }
}
