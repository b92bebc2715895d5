//! Table rules.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_reshuffle_below(3)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of 52-card decks in the shoe.
    pub decks: u8,
    /// Reshuffle before a deal once fewer than this many decks' worth of
    /// cards remain, capped at half the shoe. 0 disables penetration
    /// reshuffles.
    pub reshuffle_below: u8,
    /// Blackjack bonus ratio on top of the returned wager (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Rounding mode for the blackjack bonus.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            reshuffle_below: 4,
            blackjack_pays: 1.5,
            stand_on_soft_17: true,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold, in decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_below(2);
    /// assert_eq!(options.reshuffle_below, 2);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, decks: u8) -> Self {
        self.reshuffle_below = decks;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
