//! Error types for round operations.

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe was built with zero decks and has nothing to deal.
    #[error("the shoe holds no cards")]
    Empty,
    /// More cards were stacked than the shoe can hold.
    #[error("stacked cards exceed shoe capacity")]
    Overfilled,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The largest possible payout on this wager does not fit in a balance.
    #[error("bet amount is too large to pay out")]
    Unpayable,
}

/// Errors from turning raw input into a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Input is not a whole number.
    #[error("wager is not a number")]
    NotANumber,
    /// Input is zero or negative.
    #[error("wager must be positive")]
    NotPositive,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// The shoe could not deal.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The shoe could not deal.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during the dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// The payout does not fit in a balance.
    #[error("payout overflows")]
    PayoutOverflow,
    /// The shoe could not deal.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
