//! A single 52-card deck with a draw cursor.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use tracing::trace;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards and the position of the next card to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Index of the next undrawn card.
    cursor: usize,
}

impl Deck {
    /// Creates a deck in its initial, unshuffled order.
    ///
    /// Suits run diamonds, hearts, spades, clubs and each suit runs from
    /// two to ace, so the card at `13 * suit + rank` is that suit and rank.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards, cursor: 0 }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// Used to replay a known sequence. The cards are not checked for
    /// duplicates and may number fewer than [`DECK_SIZE`].
    #[must_use]
    pub const fn from_order(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Shuffles every card in the deck and resets the cursor.
    ///
    /// Fisher–Yates: walks from the last index down to the first and swaps
    /// each position with a uniformly chosen position at or before it.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (0..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self.cursor = 0;
        trace!(cards = self.cards.len(), "deck shuffled");
    }

    /// Draws the card at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once every card has been drawn.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    /// Returns the index of the next card to draw.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns every card in the deck, drawn or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
