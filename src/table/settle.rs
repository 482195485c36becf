use alloc::vec::Vec;

use crate::error::ShoeError;
use crate::hand::Hand;
use crate::options::{RoundingMode, TableOptions};
use crate::player::Player;
use crate::result::{HandOutcome, HandResult, PlayerSettlement, RejectedBet, RoundResult};

use super::{RoundPhase, Table};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Outcome of a player hand against the dealer's final hand, and what it pays.
///
/// Payouts include the stake: a win pays twice the bet, a push returns it.
fn resolve(hand: &Hand, dealer: &Hand, options: &TableOptions) -> (HandOutcome, usize) {
    let bet = hand.bet();
    if hand.is_bust() {
        return (HandOutcome::Lose, 0);
    }
    if hand.is_blackjack() {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = round_amount(bet as f64 * options.blackjack_pays, options.rounding_blackjack);
        return (HandOutcome::Blackjack, bet + winnings);
    }

    let total = hand.total();
    let dealer_total = dealer.total();
    if dealer.is_bust() || total > dealer_total {
        (HandOutcome::Win, bet * 2)
    } else if total == dealer_total {
        (HandOutcome::Push, bet)
    } else {
        (HandOutcome::Lose, 0)
    }
}

impl Table {
    /// Lets the dealer draw to their final hand.
    pub(super) fn dealer_action(&mut self) -> Result<(), ShoeError> {
        self.enter(RoundPhase::DealerTurn);
        let drawn = self.dealer.play(&mut self.shoe, &mut self.broadcast)?;
        log::debug!("dealer draws {drawn} and ends on {}", self.dealer.hand());
        Ok(())
    }

    /// Pays every hand and moves each seated player's round into their bank.
    pub(super) fn settle(
        &mut self,
        players: &mut [Player],
        rejected_bets: Vec<RejectedBet>,
        banks_before: &[(usize, usize)],
    ) -> RoundResult {
        self.enter(RoundPhase::Settled);

        let dealer = self.dealer.hand();
        let mut hands = Vec::new();

        for (seat_index, seat) in self.seats.iter().enumerate() {
            let Some(player_id) = seat.player() else {
                continue;
            };
            let Some(player) = players.get_mut(player_id) else {
                continue;
            };

            for (hand_index, hand) in seat.hands().iter().enumerate() {
                let (outcome, payout) = resolve(hand, dealer, &self.options);
                player.add_payout(payout);
                hands.push(HandResult {
                    seat: seat_index,
                    hand_index,
                    player_id,
                    outcome,
                    bet: hand.bet(),
                    payout,
                    player_value: hand.total(),
                });
            }
        }

        let mut settlements = Vec::with_capacity(banks_before.len());
        for &(player_id, bank_before) in banks_before {
            let Some(player) = players.get_mut(player_id) else {
                continue;
            };
            let wagered = player.round_betting();
            let payout = player.payout();
            let bank_after = player.settle_round();
            log::debug!("{} bank: {bank_before} -> {bank_after}", player.name());
            settlements.push(PlayerSettlement {
                player_id,
                bank_before,
                bank_after,
                wagered,
                payout,
            });
        }

        RoundResult {
            hands,
            rejected_bets,
            players: settlements,
            dealer_value: dealer.total(),
            dealer_bust: dealer.is_bust(),
        }
    }
}
