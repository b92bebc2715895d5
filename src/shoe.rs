//! The multi-deck shoe cards are dealt from.

extern crate alloc;

use alloc::vec::Vec;

use log::{debug, info};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::ShoeError;
use crate::options::GameOptions;

/// A shoe built from one reference deck repeated `decks` times.
///
/// Cards are shuffled up front and dealt from the end of the working set.
/// Before each deal the shoe checks its penetration and, once fewer than
/// the configured threshold remain, restores and reshuffles the full set.
/// The threshold never exceeds half the shoe, so small shoes still deal
/// through half their cards between reshuffles.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// One reference deck.
    deck: Vec<Card>,
    /// Number of reference decks making up a full shoe.
    decks: u8,
    /// Working set; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
    /// Configured threshold, in decks.
    reshuffle_decks: u8,
    /// Reshuffle when the working set holds fewer cards than this.
    reshuffle_below: usize,
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates and shuffles a shoe using the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{GameOptions, Shoe};
    ///
    /// let shoe = Shoe::new(&GameOptions::default(), 42);
    /// assert_eq!(shoe.cards_remaining(), 416);
    /// ```
    #[must_use]
    pub fn new(options: &GameOptions, seed: u64) -> Self {
        let deck = standard_deck();
        let capacity = deck.len() * options.decks as usize;
        let mut shoe = Self {
            deck,
            decks: options.decks,
            cards: Vec::new(),
            reshuffle_decks: options.reshuffle_below,
            reshuffle_below: (DECK_SIZE * options.reshuffle_below as usize).min(capacity / 2),
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.fill();
        shoe
    }

    fn fill(&mut self) {
        let capacity = self.capacity();
        self.cards.clear();
        self.cards.reserve(capacity);
        for _ in 0..self.decks {
            self.cards.extend_from_slice(&self.deck);
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Restores every card to the shoe and shuffles it.
    pub fn reshuffle(&mut self) {
        self.fill();
        self.reshuffles += 1;
        info!(
            "reshuffled shoe: {} cards across {} decks",
            self.cards.len(),
            self.decks
        );
    }

    /// Returns whether the next deal will reshuffle first.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.is_empty() || self.cards.len() < self.reshuffle_below
    }

    /// Deals the top card, reshuffling first if the shoe has run low.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe was built with zero decks.
    pub fn deal_card(&mut self) -> Result<Card, ShoeError> {
        if self.needs_reshuffle() {
            self.reshuffle();
        }
        let card = self.cards.pop().ok_or(ShoeError::Empty)?;
        debug!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Replaces the working set so that `draws` are dealt in order.
    ///
    /// Penetration still applies: stacking fewer cards than the reshuffle
    /// threshold means the next deal reshuffles them away.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Overfilled`] if `draws` exceeds the shoe capacity.
    pub fn stack(&mut self, draws: &[Card]) -> Result<(), ShoeError> {
        if draws.len() > self.capacity() {
            return Err(ShoeError::Overfilled);
        }
        self.cards.clear();
        self.cards.extend(draws.iter().rev());
        Ok(())
    }

    /// Returns the number of cards left in the working set.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.deck.len() * self.decks as usize
    }

    /// Returns the number of decks in a full shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the reshuffle threshold the shoe was configured with, in decks.
    #[must_use]
    pub const fn reshuffle_decks(&self) -> u8 {
        self.reshuffle_decks
    }

    /// Returns the number of cards below which the next deal reshuffles.
    ///
    /// This is the configured threshold capped at half the shoe.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> usize {
        self.reshuffle_below
    }

    /// Returns how many times the shoe has been reshuffled.
    #[must_use]
    pub const fn reshuffle_count(&self) -> usize {
        self.reshuffles
    }
}
