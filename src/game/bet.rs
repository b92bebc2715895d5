use log::debug;

use crate::error::{BetError, DealError, WagerError};
use crate::result::Outcome;

use super::dealer::payout_for;
use super::{GameState, Round};

/// Parses a wager typed by the player.
///
/// Front-ends use this before calling [`Round::place_bet`], which only
/// accepts numeric wagers.
///
/// # Errors
///
/// Returns [`WagerError::NotPositive`] for zero or negative input and
/// [`WagerError::NotANumber`] for anything else that is not a whole number.
///
/// # Example
///
/// ```
/// use bjsim::{WagerError, parse_wager};
///
/// assert_eq!(parse_wager(" 25 "), Ok(25));
/// assert_eq!(parse_wager("-5"), Err(WagerError::NotPositive));
/// assert_eq!(parse_wager("lots"), Err(WagerError::NotANumber));
/// ```
pub fn parse_wager(input: &str) -> Result<usize, WagerError> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(0) => Err(WagerError::NotPositive),
        Ok(amount) => Ok(amount),
        Err(_) if input.parse::<i64>().is_ok() => Err(WagerError::NotPositive),
        Err(_) => Err(WagerError::NotANumber),
    }
}

impl Round {
    /// Places the wager against `balance`.
    ///
    /// Returns the balance left after the wager is deducted. On error the
    /// round stays in the betting state and can be retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting state, the wager
    /// is zero, it exceeds `balance`, or a winning payout on it would not
    /// fit in a `usize`.
    pub fn place_bet(&mut self, amount: usize, balance: usize) -> Result<usize, BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > balance {
            return Err(BetError::InsufficientFunds);
        }
        let left = balance - amount;
        let payable = [Outcome::PlayerBlackjack, Outcome::PlayerHigher]
            .into_iter()
            .all(|outcome| {
                payout_for(&self.options, outcome, amount)
                    .and_then(|payout| payout.checked_add(left))
                    .is_some()
            });
        if !payable {
            return Err(BetError::Unpayable);
        }

        self.wager = amount;
        self.state = GameState::Dealing;
        debug!("bet {amount} of {balance}");

        Ok(left)
    }

    /// Deals two cards each to the player and the dealer.
    ///
    /// A player natural skips straight to the dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no wager has been placed yet or the shoe cannot
    /// deal.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            self.player.add_card(self.shoe.deal_card()?);
            self.dealer.add_card(self.shoe.deal_card()?);
        }

        self.state = if self.player.has_blackjack() {
            GameState::DealerTurn
        } else {
            GameState::PlayerTurn
        };
        debug!(
            "opening hands: player {}, dealer shows {}",
            self.player.score(),
            self.dealer.up_card().map_or(0, |card| card.value())
        );

        Ok(())
    }
}
