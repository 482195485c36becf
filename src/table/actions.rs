use crate::error::RoundError;
use crate::player::Player;

use super::{RoundPhase, Table};

impl Table {
    /// Plays every hand at every occupied seat, in seat order.
    ///
    /// Hands are visited by index because a split appends the second hand to
    /// the seat while it is being played; the new hand is reached later in
    /// the same pass.
    pub(super) fn player_actions(&mut self, players: &mut [Player]) -> Result<(), RoundError> {
        self.enter(RoundPhase::PlayerTurn);

        let Self {
            seats,
            shoe,
            broadcast,
            ..
        } = self;

        for (seat_index, seat) in seats.iter_mut().enumerate() {
            let Some(player_id) = seat.player() else {
                continue;
            };
            let player = players
                .get_mut(player_id)
                .ok_or(RoundError::UnknownPlayer(player_id))?;

            let mut index = 0;
            while index < seat.hands().len() {
                let only_hand = seat.hands().len() == 1;
                let hand = &mut seat.hands_mut()[index];
                let bet = hand.bet();

                if hand.len() == 1 {
                    // Second hand of a split.
                    hand.add_card(shoe.next_card(broadcast)?);
                } else if only_hand
                    && hand.can_split()
                    && player.available() >= bet
                    && player
                        .strategy()
                        .wants_to_split(hand, &player.view(broadcast))?
                {
                    if seat.split(index).is_some() {
                        player.escrow(bet);
                        seat.hands_mut()[index].add_card(shoe.next_card(broadcast)?);
                        log::debug!("seat {seat_index}: {} splits", player.name());
                    }
                } else if hand.can_double_down()
                    && player.available() >= bet
                    && player
                        .strategy()
                        .wants_to_double_down(hand, &player.view(broadcast))?
                {
                    player.escrow(bet);
                    hand.double_bet();
                    hand.add_card(shoe.next_card(broadcast)?);
                    hand.stick();
                    log::debug!("seat {seat_index}: {} doubles down", player.name());
                }

                let hand = &mut seat.hands_mut()[index];
                while hand.can_be_played() {
                    if player
                        .strategy()
                        .wants_to_hit(hand, &player.view(broadcast))?
                    {
                        hand.add_card(shoe.next_card(broadcast)?);
                    } else {
                        hand.stick();
                    }
                }
                log::debug!("seat {seat_index}.{index}: {} ends on {hand}", player.name());

                index += 1;
            }
        }

        Ok(())
    }
}
