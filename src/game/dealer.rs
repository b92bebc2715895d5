use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::options::{GameOptions, RoundingMode};
use crate::result::{Outcome, Settlement};

use super::{GameState, Round};

/// The dealer draws below this score.
const DEALER_STANDS_AT: u8 = 17;

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

/// Returns the amount credited back for `outcome` on `wager`, or `None` if
/// it does not fit in a `usize`.
pub(super) fn payout_for(options: &GameOptions, outcome: Outcome, wager: usize) -> Option<usize> {
    match outcome {
        Outcome::Push => Some(wager),
        Outcome::PlayerBlackjack => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let bonus = (wager as f64) * options.blackjack_pays;
            let bonus = round_amount(bonus, options.rounding_blackjack);
            if bonus == usize::MAX {
                // Float to int casts saturate.
                return None;
            }
            wager.checked_add(bonus)
        }
        Outcome::DealerBust | Outcome::PlayerHigher => wager.checked_mul(2),
        Outcome::DealerBlackjack | Outcome::PlayerBust | Outcome::DealerHigher => Some(0),
    }
}

/// Decides a finished round from the two final hands.
///
/// Rules are checked in order and the first match wins, so a tie beats
/// either natural and both bust checks come before comparing scores.
#[must_use]
pub fn adjudicate(player: &Hand, dealer: &Hand) -> Outcome {
    if player.score() == dealer.score() {
        Outcome::Push
    } else if dealer.has_blackjack() {
        Outcome::DealerBlackjack
    } else if player.has_blackjack() {
        Outcome::PlayerBlackjack
    } else if player.is_busted() {
        Outcome::PlayerBust
    } else if dealer.is_busted() {
        Outcome::DealerBust
    } else if player.score() > dealer.score() {
        Outcome::PlayerHigher
    } else {
        Outcome::DealerHigher
    }
}

impl Round {
    fn dealer_should_draw(&self) -> bool {
        let score = self.dealer.score();
        if self.dealer.is_busted() {
            return false;
        }
        score < DEALER_STANDS_AT
            || (score == DEALER_STANDS_AT
                && self.dealer.is_soft()
                && !self.options.stand_on_soft_17)
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher, and also hits a soft 17
    /// when `stand_on_soft_17` is off. The dealer plays out even if the
    /// player has already busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn or the shoe
    /// cannot deal.
    pub fn run_dealer_turn(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.dealer_should_draw() {
            let card = self.shoe.deal_card()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }
        debug!(
            "dealer drew {} card(s), final score {}",
            drawn_cards.len(),
            self.dealer.score()
        );

        self.state = GameState::Showdown;

        Ok(drawn_cards)
    }

    /// Adjudicates the round and reports the payout.
    ///
    /// The payout is what the caller credits back to the balance returned
    /// by [`Round::place_bet`]: the wager on a push, the wager plus the
    /// rounded blackjack bonus on a player natural, twice the wager on any
    /// other win, and nothing on a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished, the round has
    /// already been settled, or the payout overflows.
    pub fn settle(&mut self) -> Result<Settlement, ShowdownError> {
        if self.state != GameState::Showdown {
            return Err(ShowdownError::InvalidState);
        }

        let outcome = adjudicate(&self.player, &self.dealer);
        let wager = self.wager;
        let payout =
            payout_for(&self.options, outcome, wager).ok_or(ShowdownError::PayoutOverflow)?;

        self.state = GameState::Settled;
        debug!("settled: {outcome}, payout {payout} on {wager}");

        Ok(Settlement {
            outcome,
            wager,
            payout,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
        })
    }
}
