//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Shoe`] that deals from several shuffled decks, a
//! [`Hand`] that scores itself, and a [`Round`] that runs one hand from the
//! wager to the payout against a dealer who draws to 17.
//!
//! # Example
//!
//! ```no_run
//! use bjsim::{GameOptions, Round, Shoe};
//!
//! let options = GameOptions::default();
//! let shoe = Shoe::new(&options, 42);
//! let round = Round::with_options(shoe, options);
//! let _ = round;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, ShoeError, ShowdownError, WagerError};
pub use game::{GameState, Round, adjudicate, parse_wager};
pub use hand::{BLACKJACK, Hand};
pub use options::{GameOptions, RoundingMode};
pub use result::{Outcome, Settlement};
pub use shoe::Shoe;
