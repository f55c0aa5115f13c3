//! Showdown report types.
//!
//! The table lists every hand's outcome side by side. It does not settle
//! hands against the dealer or pay anything out.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::Outcome;
use crate::player::Seat;

/// Outcomes of everything one participant played this game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    /// The participant.
    pub seat: Seat,
    /// Outcome of each hand, in the order the hands were played.
    pub outcomes: Vec<Outcome>,
    /// Bankroll after the game.
    pub bankroll: u32,
}

impl PlayerSummary {
    /// Returns whether any hand ended in a blackjack.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.outcomes.contains(&Outcome::Blackjack)
    }
}

/// Side-by-side listing of the game's final hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownReport {
    /// Players from the highest seat down, then the dealer.
    pub players: Vec<PlayerSummary>,
}

impl ShowdownReport {
    /// Returns the dealer's summary.
    #[must_use]
    pub fn dealer(&self) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| p.seat.is_dealer())
    }

    /// Returns the summaries of the human players.
    pub fn human_players(&self) -> impl Iterator<Item = &PlayerSummary> {
        self.players.iter().filter(|p| !p.seat.is_dealer())
    }

    /// Returns whether the dealer opened with a blackjack.
    #[must_use]
    pub fn dealer_blackjack(&self) -> bool {
        self.dealer().is_some_and(PlayerSummary::has_blackjack)
    }
}
