//! Player moves and which of them are legal.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Score at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// A decision taken on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Draw another card.
    Stand,
    /// Stop drawing and keep the current total.
    Fold,
    /// Add one base bet, draw exactly one card and stop.
    DoubleDown,
    /// Give up the hand and take back half its bet.
    Surrender,
}

impl Move {
    /// All moves in prompt order.
    pub const ALL: [Self; 4] = [Self::Stand, Self::Fold, Self::DoubleDown, Self::Surrender];

    /// Name shown to the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stand => "Stand",
            Self::Fold => "Fold",
            Self::DoubleDown => "Double down",
            Self::Surrender => "Surrender",
        }
    }

    /// Parses a move name, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use blackjack_table::Move;
    ///
    /// assert_eq!(Move::parse(" DOUBLE down "), Some(Move::DoubleDown));
    /// assert_eq!(Move::parse("hit"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|mv| mv.name().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The dealer's fixed policy: draw below 17, stop otherwise.
#[must_use]
pub const fn dealer_move(score: u8) -> Move {
    if score < DEALER_STANDS_ON {
        Move::Stand
    } else {
        Move::Fold
    }
}

/// Which moves are open at a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMoves {
    /// Drawing is allowed.
    pub stand: bool,
    /// Stopping is allowed.
    pub fold: bool,
    /// Doubling down is allowed.
    pub double_down: bool,
    /// Surrendering is allowed.
    pub surrender: bool,
}

impl LegalMoves {
    /// Computes the legal moves for a human player's hand.
    ///
    /// Split aces may not draw. Doubling and surrendering are only open
    /// on the first two cards, and doubling needs another base bet.
    #[must_use]
    pub const fn for_hand(cards_held: usize, ace_split: bool, can_cover_base_bet: bool) -> Self {
        let first_decision = cards_held == 2;
        Self {
            stand: !ace_split,
            fold: true,
            double_down: first_decision && can_cover_base_bet,
            surrender: first_decision,
        }
    }

    /// Returns whether the move is legal.
    #[must_use]
    pub const fn allows(&self, mv: Move) -> bool {
        match mv {
            Move::Stand => self.stand,
            Move::Fold => self.fold,
            Move::DoubleDown => self.double_down,
            Move::Surrender => self.surrender,
        }
    }

    /// Returns the legal moves in prompt order.
    pub fn available(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&mv| self.allows(mv))
    }

    /// Builds the prompt listing the legal moves.
    ///
    /// ```
    /// use blackjack_table::LegalMoves;
    ///
    /// let moves = LegalMoves::for_hand(3, false, true);
    /// assert_eq!(moves.prompt(), "You can \"Stand\" or \"Fold\"");
    /// ```
    #[must_use]
    pub fn prompt(&self) -> String {
        let names: alloc::vec::Vec<&str> = self.available().map(Move::name).collect();
        let mut text = String::from("You can ");
        for (index, name) in names.iter().enumerate() {
            if index > 0 {
                text.push_str(if names.len() > 2 { ", " } else { " " });
                if index == names.len() - 1 {
                    text.push_str("or ");
                }
            }
            text.push('"');
            text.push_str(name);
            text.push('"');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_exact() {
        assert_eq!(Move::parse("stand"), Some(Move::Stand));
        assert_eq!(Move::parse("FOLD"), Some(Move::Fold));
        assert_eq!(Move::parse("Double Down"), Some(Move::DoubleDown));
        assert_eq!(Move::parse("surrender\n"), Some(Move::Surrender));
        assert_eq!(Move::parse("double"), None);
        assert_eq!(Move::parse("stand!"), None);
        assert_eq!(Move::parse(""), None);
    }

    #[test]
    fn dealer_draws_below_seventeen() {
        assert_eq!(dealer_move(16), Move::Stand);
        assert_eq!(dealer_move(17), Move::Fold);
        assert_eq!(dealer_move(20), Move::Fold);
        assert_eq!(dealer_move(4), Move::Stand);
    }

    #[test]
    fn first_decision_opens_everything() {
        let moves = LegalMoves::for_hand(2, false, true);
        assert_eq!(moves.available().collect::<Vec<_>>(), Move::ALL.to_vec());
        assert_eq!(
            moves.prompt(),
            "You can \"Stand\", \"Fold\", \"Double down\", or \"Surrender\""
        );
    }

    #[test]
    fn later_decisions_only_stand_or_fold() {
        let moves = LegalMoves::for_hand(3, false, true);
        assert!(moves.allows(Move::Stand));
        assert!(moves.allows(Move::Fold));
        assert!(!moves.allows(Move::DoubleDown));
        assert!(!moves.allows(Move::Surrender));
    }

    #[test]
    fn double_down_needs_funds() {
        let moves = LegalMoves::for_hand(2, false, false);
        assert!(!moves.allows(Move::DoubleDown));
        assert!(moves.allows(Move::Surrender));
        assert_eq!(
            moves.prompt(),
            "You can \"Stand\", \"Fold\", or \"Surrender\""
        );
    }

    #[test]
    fn split_aces_cannot_draw() {
        let moves = LegalMoves::for_hand(2, true, true);
        assert!(!moves.allows(Move::Stand));
        assert!(moves.allows(Move::DoubleDown));

        let moves = LegalMoves::for_hand(3, true, true);
        assert_eq!(moves.available().collect::<Vec<_>>(), [Move::Fold]);
        assert_eq!(moves.prompt(), "You can \"Fold\"");
    }
}
