//! Round phase tracking.

/// Phase of the round currently running at a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No round has started since the table or shoe was set up.
    #[default]
    Waiting,
    /// Hands cleared, collecting bets.
    Betting,
    /// Dealing the initial two cards.
    Dealing,
    /// Players acting on their hands.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and bets have been settled.
    Settled,
    /// The round stopped on an error; escrowed bets were returned.
    Aborted,
}
