//! Card types and card-level scoring rules.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Lowercase name used in table messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
            Self::Clubs => "clubs",
        }
    }
}

/// Card rank, ordered from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Pip count for numbered ranks, `None` for pictures and aces.
    #[must_use]
    pub const fn pips(self) -> Option<u8> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            Self::Ten => Some(10),
            Self::Jack | Self::Queen | Self::King | Self::Ace => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Indefinite article to put in front of the card's name.
    #[must_use]
    pub const fn article(self) -> &'static str {
        match self.rank {
            Rank::Ace | Rank::Eight => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for Card {
    /// Formats as `7 of hearts` or `queen of spades`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Rank::Jack => f.write_str("jack")?,
            Rank::Queen => f.write_str("queen")?,
            Rank::King => f.write_str("king")?,
            Rank::Ace => f.write_str("ace")?,
            numbered => {
                if let Some(pips) = numbered.pips() {
                    write!(f, "{pips}")?;
                }
            }
        }
        write!(f, " of {}", self.suit.name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Value a card adds to a hand whose total so far is `running_score`.
///
/// Aces count 11 while the running score is below 11 and 1 afterwards.
#[must_use]
pub const fn card_value(card: Card, running_score: u8) -> u8 {
    match card.rank {
        Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => {
            if running_score < 11 {
                11
            } else {
                1
            }
        }
        numbered => match numbered.pips() {
            Some(pips) => pips,
            None => 0,
        },
    }
}

/// Returns whether the card counts as a face card for split eligibility.
///
/// Tens are included alongside jacks, queens and kings.
#[must_use]
pub const fn is_face_card(card: Card) -> bool {
    matches!(card.rank, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
}
