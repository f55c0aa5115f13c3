//! Hand scoring and terminal hand outcomes.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank, card_value, is_face_card};

/// Highest total a hand can reach without busting.
pub const TWENTY_ONE: u8 = 21;

/// Cards held in one hand, kept apart as aces and non-aces.
///
/// The split exists for scoring: non-aces are counted first and aces
/// last, so each ace sees the whole rest of the hand before choosing
/// between 11 and 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    aces: Vec<Card>,
    non_aces: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            aces: Vec::new(),
            non_aces: Vec::new(),
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        if card.is_ace() {
            self.aces.push(card);
        } else {
            self.non_aces.push(card);
        }
    }

    /// Returns the aces in the order they were added.
    #[must_use]
    pub fn aces(&self) -> &[Card] {
        &self.aces
    }

    /// Returns the non-ace cards in the order they were added.
    #[must_use]
    pub fn non_aces(&self) -> &[Card] {
        &self.non_aces
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aces.len() + self.non_aces.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aces.is_empty() && self.non_aces.is_empty()
    }

    /// Calculates the value of the hand.
    ///
    /// Non-aces are summed first, then each ace is valued against the
    /// total accumulated so far. With several aces this can land below
    /// the best possible total; `{A, A, 9}` scores 21 but `{A, A}` alone
    /// scores 12.
    #[must_use]
    pub fn value(&self) -> u8 {
        let base = self
            .non_aces
            .iter()
            .fold(0u8, |score, &card| score.saturating_add(card_value(card, score)));
        self.aces
            .iter()
            .fold(base, |score, &card| score.saturating_add(card_value(card, score)))
    }
}

/// Calculates the value of a set of cards, aces counted last.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    Hand::from_cards(cards).value()
}

/// Returns whether two starting cards are an ace and a ten-valued card.
#[must_use]
pub const fn is_top_draw_blackjack(first: Card, second: Card) -> bool {
    const fn ten_valued(rank: Rank) -> bool {
        matches!(rank, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }

    (first.is_ace() && ten_valued(second.rank)) || (second.is_ace() && ten_valued(first.rank))
}

/// Returns whether a starting pair may be split.
///
/// Pairs of the same rank qualify, and so does any two of ten, jack,
/// queen and king.
#[must_use]
pub const fn can_split(first: Card, second: Card) -> bool {
    first.rank as u8 == second.rank as u8 || (is_face_card(first) && is_face_card(second))
}

/// Terminal result of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The hand stopped on this total (at most 21).
    Numeric(u8),
    /// The first two cards were a blackjack.
    Blackjack,
    /// The hand went over 21.
    Busted,
    /// The player gave up the hand for half the bet.
    Surrendered,
}

impl Outcome {
    /// Returns the outcome for a hand that stopped on `value`.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        if value > TWENTY_ONE {
            Self::Busted
        } else {
            Self::Numeric(value)
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Blackjack => f.write_str("blackjack"),
            Self::Busted => f.write_str("busted"),
            Self::Surrendered => f.write_str("surrendered"),
        }
    }
}
