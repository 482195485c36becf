//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::BetError;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player has blackjack.
    Blackjack,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Push (tie).
    Push,
    /// Player loses (player busts or dealer has higher value).
    Lose,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Seat the hand was played at.
    pub seat: usize,
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// Player who owns the seat.
    pub player_id: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand, doubled if the player doubled down.
    pub bet: usize,
    /// The payout amount, stake included.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
}

impl HandResult {
    /// Payout minus bet.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// A bet the table refused; the seat sat the round out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedBet {
    /// Seat the bet was offered at.
    pub seat: usize,
    /// Player who offered it.
    pub player_id: usize,
    /// Why it was refused.
    pub reason: BetError,
}

/// A player's bank movement over one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSettlement {
    /// The player ID.
    pub player_id: usize,
    /// Bank when the round started.
    pub bank_before: usize,
    /// Bank after settlement.
    pub bank_after: usize,
    /// Total escrowed across all the player's hands, doubles and splits.
    pub wagered: usize,
    /// Total paid back, stakes included.
    pub payout: usize,
}

impl PlayerSettlement {
    /// Net result (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bank values fit in isize")]
    pub const fn net(&self) -> isize {
        self.bank_after as isize - self.bank_before as isize
    }
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, Default)]
pub struct RoundResult {
    /// Results for each hand, in seat order.
    pub hands: Vec<HandResult>,
    /// Bets refused during the betting phase.
    pub rejected_bets: Vec<RejectedBet>,
    /// Bank movement for each seated player.
    pub players: Vec<PlayerSettlement>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Results for the hands owned by `player_id`.
    pub fn hands_for(&self, player_id: usize) -> impl Iterator<Item = &HandResult> {
        self.hands
            .iter()
            .filter(move |hand| hand.player_id == player_id)
    }

    /// Settlement of `player_id`, if the player was seated.
    #[must_use]
    pub fn settlement(&self, player_id: usize) -> Option<&PlayerSettlement> {
        self.players
            .iter()
            .find(|player| player.player_id == player_id)
    }
}
