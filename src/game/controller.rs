//! The seam between the table and whoever is making decisions.

use crate::card::Card;
use crate::error::InputError;
use crate::player::{Player, Seat};

use super::moves::{LegalMoves, Move};

/// Something that happened at the table that a controller may want to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// A player with an empty bankroll sits this game out.
    SatOut {
        /// The broke player.
        seat: Seat,
    },
    /// A participant starts playing their hands.
    TurnStarted {
        /// Whose turn it is.
        seat: Seat,
    },
    /// A hand starts with these two cards.
    StartingCards {
        /// Who holds the hand.
        seat: Seat,
        /// The two cards.
        cards: [Card; 2],
    },
    /// A hand opened with a blackjack.
    Blackjack {
        /// Who holds the hand.
        seat: Seat,
    },
    /// Reminder of the dealer's face-up card.
    DealerShows {
        /// The dealer's first card.
        card: Card,
    },
    /// The pair could be split but the player cannot cover another bet.
    SplitUnaffordable {
        /// The player who cannot afford the split.
        seat: Seat,
    },
    /// A pair was split into two hands.
    Split {
        /// The player who split.
        seat: Seat,
        /// Whether two aces were split.
        aces: bool,
    },
    /// A card was drawn onto a hand.
    Drew {
        /// Who drew.
        seat: Seat,
        /// The card drawn.
        card: Card,
    },
    /// A hand reached exactly 21.
    HitTwentyOne {
        /// Who holds the hand.
        seat: Seat,
    },
    /// A hand went over 21.
    Busted {
        /// Who holds the hand.
        seat: Seat,
    },
    /// A hand was surrendered.
    Surrendered {
        /// Who surrendered.
        seat: Seat,
        /// Money returned to the bankroll.
        refund: u32,
    },
}

/// The state of a hand when a move is requested.
#[derive(Debug, Clone, Copy)]
pub struct Decision<'a> {
    /// Who is deciding.
    pub seat: Seat,
    /// Current value of the hand.
    pub score: u8,
    /// Cards in the hand, in the order received.
    pub cards: &'a [Card],
    /// Moves that may be chosen.
    pub legal: LegalMoves,
    /// Bet pool on the hand.
    pub bet: u32,
    /// Money left in the bankroll.
    pub bankroll: u32,
}

/// A split the player may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOffer {
    /// Who may split.
    pub seat: Seat,
    /// The pair.
    pub cards: [Card; 2],
    /// Cost of the extra hand.
    pub cost: u32,
    /// Money left in the bankroll.
    pub bankroll: u32,
}

/// Supplies the decisions of human players and hears about table events.
///
/// The dealer is never asked; it follows [`dealer_move`](super::dealer_move).
pub trait Controller {
    /// Asks a player for the base bet of this game.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn base_bet(&mut self, player: &Player) -> Result<u32, InputError>;

    /// Asks whether to split a pair.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn offer_split(&mut self, offer: &SplitOffer) -> Result<bool, InputError>;

    /// Asks for the next move on a hand. Only legal moves are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn choose_move(&mut self, decision: &Decision<'_>) -> Result<Move, InputError>;

    /// Reports an event at the table.
    fn notify(&mut self, event: &RoundEvent);
}

impl<C: Controller + ?Sized> Controller for &mut C {
    fn base_bet(&mut self, player: &Player) -> Result<u32, InputError> {
        (**self).base_bet(player)
    }

    fn offer_split(&mut self, offer: &SplitOffer) -> Result<bool, InputError> {
        (**self).offer_split(offer)
    }

    fn choose_move(&mut self, decision: &Decision<'_>) -> Result<Move, InputError> {
        (**self).choose_move(decision)
    }

    fn notify(&mut self, event: &RoundEvent) {
        (**self).notify(event);
    }
}
