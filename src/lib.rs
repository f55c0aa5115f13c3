//! A terminal blackjack table for up to four players against the dealer.
//!
//! The crate provides a [`Table`] type that runs whole games: betting,
//! dealing, every player's decisions including splits, the dealer's fixed
//! policy, and a side-by-side showdown listing. Decisions come from a
//! [`Controller`]; the `std` feature adds [`console::Console`], which
//! reads them from a terminal.
//!
//! # Example
//!
//! ```no_run
//! use blackjack_table::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let table = Table::new(options, 42);
//! let _ = table;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, card_value, is_face_card};
pub use deck::Deck;
pub use error::{BetError, DeckError, GameError, InputError};
pub use game::{
    Controller, DEALER_STANDS_ON, Decision, LegalMoves, Move, RoundEvent, SplitOffer, Table,
    dealer_move,
};
pub use hand::{Hand, Outcome, can_split, hand_value, is_top_draw_blackjack};
pub use options::TableOptions;
pub use player::{HandRecord, Player, Seat};
pub use result::{PlayerSummary, ShowdownReport};
