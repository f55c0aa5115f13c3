//! Error types for table operations.

use thiserror::Error;

use crate::game::Move;
use crate::player::Seat;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card in the deck has been drawn.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The player has not declared a base bet for this game.
    #[error("no base bet has been declared")]
    NoBaseBet,
}

/// Errors raised by a controller while waiting for a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input stream ended.
    #[error("input closed")]
    Closed,
    /// The input stream could not be read.
    #[error("failed to read input")]
    Read,
    /// Prompts could not be written.
    #[error("failed to write output")]
    Write,
}

/// Errors that can occur while running a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A bet could not be placed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The controller could not provide a decision.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The seat does not exist at this table.
    #[error("there is no seat {0} at this table")]
    UnknownSeat(Seat),
    /// The seat has not been dealt a starting hand.
    #[error("{0} has not been dealt in")]
    NotDealt(Seat),
    /// The controller chose a move that is not legal for the hand.
    #[error("{0} is not a legal move right now")]
    IllegalMove(Move),
    /// The requested number of players is not supported by the table.
    #[error("the table seats 1 to {max} players, not {requested}")]
    InvalidPlayerCount {
        /// Number of players requested.
        requested: usize,
        /// Number of player seats at the table.
        max: usize,
    },
}
