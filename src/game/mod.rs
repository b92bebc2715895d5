//! Round engine and state management.

use crate::hand::Hand;
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use bet::parse_wager;
pub use dealer::adjudicate;
pub use state::GameState;

/// One hand of blackjack between the player and the dealer.
///
/// The round owns the shoe for its duration; take it back with
/// [`Round::into_shoe`] to carry it into the next round. The player's money
/// stays with the caller: it is passed to [`Round::place_bet`] and the
/// settlement reports what to credit back.
///
/// # Example
///
/// ```
/// use bjsim::{GameOptions, GameState, Round, Shoe};
///
/// let options = GameOptions::default();
/// let mut round = Round::with_options(Shoe::new(&options, 42), options);
/// let mut balance = round.place_bet(10, 100).unwrap();
/// round.deal_initial().unwrap();
/// if round.state() == GameState::PlayerTurn {
///     round.player_stand().unwrap();
/// }
/// round.run_dealer_turn().unwrap();
/// let settlement = round.settle().unwrap();
/// balance += settlement.payout;
/// assert!(balance <= 115);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    shoe: Shoe,
    options: GameOptions,
    state: GameState,
    player: Hand,
    dealer: Hand,
    wager: usize,
    /// Shoe reshuffle count when the round started.
    reshuffles_at_start: usize,
}

impl Round {
    /// Starts a round with the default table rules.
    #[must_use]
    pub fn new(shoe: Shoe) -> Self {
        Self::with_options(shoe, GameOptions::default())
    }

    /// Starts a round with the given table rules.
    ///
    /// The shoe keeps the deck count and reshuffle threshold it was built
    /// with, and those fields of `options` are overwritten to match it.
    /// `options` supplies the payout and dealer rules.
    #[must_use]
    pub fn with_options(shoe: Shoe, mut options: GameOptions) -> Self {
        options.decks = shoe.decks();
        options.reshuffle_below = shoe.reshuffle_decks();
        let reshuffles_at_start = shoe.reshuffle_count();
        Self {
            shoe,
            options,
            state: GameState::Betting,
            player: Hand::new(),
            dealer: Hand::new(),
            wager: 0,
            reshuffles_at_start,
        }
    }

    /// Ends the round and returns the shoe for the next one.
    #[must_use]
    pub fn into_shoe(self) -> Shoe {
        self.shoe
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the wager, or 0 before a bet is placed.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the table rules.
    ///
    /// `decks` and `reshuffle_below` always describe the round's shoe.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns whether the shoe was reshuffled during this round.
    #[must_use]
    pub const fn reshuffled(&self) -> bool {
        self.shoe.reshuffle_count() > self.reshuffles_at_start
    }
}
