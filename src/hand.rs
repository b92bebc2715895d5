//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The best possible score; anything above it is bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// The cards held by one participant, player or dealer.
///
/// The score is recomputed on every added card. Every Ace counts as 11
/// until the total would pass 21, then Aces drop to 1 one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    score: u8,
    soft: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            score: 0,
            soft: false,
        }
    }

    /// Adds a card to the hand and rescores it.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        (self.score, self.soft) = evaluate_cards(&self.cards);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the dealer's face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.score > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::new();
        for card in iter {
            hand.add_card(card);
        }
        hand
    }
}
