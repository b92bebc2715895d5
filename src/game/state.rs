//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a wager.
    Betting,
    /// Wager accepted; opening cards not yet dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer has finished; the round can be settled.
    Showdown,
    /// Round has been settled.
    Settled,
}
