use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{BetError, RoundError, ShoeError};
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::RejectedBet;

use super::{RoundPhase, Table};

/// Checks a bet against the player's unescrowed bank and the table limits.
fn check_bet(options: &TableOptions, bet: usize, available: usize) -> Result<(), BetError> {
    if bet == 0 {
        return Err(BetError::ZeroBet);
    }
    if bet > available {
        return Err(BetError::InsufficientFunds { bet, available });
    }
    if bet < options.min_bet {
        return Err(BetError::BelowMinimum {
            bet,
            min: options.min_bet,
        });
    }
    if let Some(max) = options.max_bet.filter(|&max| bet > max) {
        return Err(BetError::AboveMaximum { bet, max });
    }
    Ok(())
}

impl Table {
    /// Clears every seat's hands and the dealer's hand.
    pub(super) fn clean(&mut self) {
        self.enter(RoundPhase::Betting);
        for seat in &mut self.seats {
            seat.clear();
        }
        self.dealer.clear();
    }

    /// Asks every seated player for a bet and opens a hand for each accepted one.
    ///
    /// Accepted bets are escrowed, not yet taken from the bank.
    pub(super) fn take_bets(
        &mut self,
        players: &mut [Player],
    ) -> Result<Vec<RejectedBet>, RoundError> {
        let mut rejected = Vec::new();

        for (index, seat) in self.seats.iter_mut().enumerate() {
            let Some(player_id) = seat.player() else {
                continue;
            };
            let player = players
                .get_mut(player_id)
                .ok_or(RoundError::UnknownPlayer(player_id))?;

            let bet = player.strategy().bet(&player.view(&self.broadcast))?;
            match check_bet(&self.options, bet, player.available()) {
                Ok(()) => {
                    seat.place_bet(bet);
                    player.escrow(bet);
                    log::debug!("seat {index}: {} bets {bet}", player.name());
                }
                Err(reason) => {
                    if matches!(reason, BetError::ZeroBet) {
                        log::debug!("seat {index}: {} sits out", player.name());
                    } else {
                        log::warn!("seat {index}: {} bet refused: {reason}", player.name());
                    }
                    rejected.push(RejectedBet {
                        seat: index,
                        player_id,
                        reason,
                    });
                }
            }
        }

        Ok(rejected)
    }

    /// Deals two cards to every open hand and to the dealer, one at a time.
    ///
    /// The dealer's up-card is published once both passes are done.
    pub(super) fn deal(&mut self) -> Result<(), ShoeError> {
        self.enter(RoundPhase::Dealing);

        for _ in 0..2 {
            for seat in &mut self.seats {
                for hand in seat.hands_mut() {
                    hand.add_card(self.shoe.next_card(&mut self.broadcast)?);
                }
            }
            self.dealer
                .add_card(self.shoe.next_card(&mut self.broadcast)?);
        }

        let up_card = self.dealer.up_card().map_or(0, Card::value);
        self.broadcast.set_dealer_upcard(up_card);
        log::debug!("dealer shows {up_card}");

        Ok(())
    }
}
