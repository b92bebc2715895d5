//! Round result types for settlement.

use core::fmt;

/// How a round was decided.
///
/// Variants are listed in the order the table checks them; the first rule
/// that matches decides the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Equal scores. The wager is returned.
    Push,
    /// Dealer holds a natural. The wager is lost.
    DealerBlackjack,
    /// Player holds a natural. Pays the wager back plus the blackjack bonus.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21. Pays even money.
    DealerBust,
    /// Player scored higher. Pays even money.
    PlayerHigher,
    /// Dealer scored higher.
    DealerHigher,
}

impl Outcome {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Push => "Draw",
            Self::DealerBlackjack => "Lose, opponent has Blackjack",
            Self::PlayerBlackjack => "Win with a Blackjack",
            Self::PlayerBust => "You went over. You lose",
            Self::DealerBust => "Opponent went over. You win",
            Self::PlayerHigher => "You win",
            Self::DealerHigher => "You lose",
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerHigher
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// How the round was decided.
    pub outcome: Outcome,
    /// The wager, already deducted when the bet was placed.
    pub wager: usize,
    /// Amount to credit to the balance left after the bet.
    pub payout: usize,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}

impl Settlement {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.outcome.label()
    }

    /// Net result against the balance before the bet (positive = profit).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.wager as isize
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.outcome.fmt(f)
    }
}
