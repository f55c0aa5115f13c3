//! Players, their bankrolls and the hands they have played.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::BetError;
use crate::hand::Outcome;

/// Where a participant sits at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    /// The dealer, slot 0.
    Dealer,
    /// A human player in slots 1 and up.
    Player(u8),
}

impl Seat {
    /// Returns the table slot of this seat.
    #[must_use]
    pub const fn slot(self) -> u8 {
        match self {
            Self::Dealer => 0,
            Self::Player(id) => id,
        }
    }

    /// Returns whether this is the dealer's seat.
    #[must_use]
    pub const fn is_dealer(self) -> bool {
        matches!(self, Self::Dealer)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealer => f.write_str("Dealer"),
            Self::Player(id) => write!(f, "Player {id}"),
        }
    }
}

/// A hand a player has finished, with the money riding on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRecord {
    /// Cards in the order they were received.
    cards: Vec<Card>,
    /// Bet pool for this hand.
    bet: u32,
    /// Whether the hand came from splitting aces.
    ace_split: bool,
    /// How the hand ended.
    outcome: Outcome,
}

impl HandRecord {
    /// Creates a record of a finished hand.
    #[must_use]
    pub const fn new(cards: Vec<Card>, bet: u32, ace_split: bool, outcome: Outcome) -> Self {
        Self {
            cards,
            bet,
            ace_split,
            outcome,
        }
    }

    /// Returns the cards in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet pool of the hand.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns whether the hand came from splitting aces.
    #[must_use]
    pub const fn is_ace_split(&self) -> bool {
        self.ace_split
    }

    /// Returns how the hand ended.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// A participant at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    bankroll: u32,
    opening_bankroll: u32,
    base_bet: u32,
    hands: Vec<HandRecord>,
    starting_hand: Option<[Card; 2]>,
}

impl Player {
    /// Creates a player with the given bankroll.
    #[must_use]
    pub const fn new(seat: Seat, bankroll: u32) -> Self {
        Self {
            seat,
            bankroll,
            opening_bankroll: bankroll,
            base_bet: 0,
            hands: Vec::new(),
            starting_hand: None,
        }
    }

    /// Creates the dealer. The dealer never bets.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Seat::Dealer, 0)
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the player's id, which is also their table slot.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.seat.slot()
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.seat.is_dealer()
    }

    /// Returns the money the player has not put on the table.
    #[must_use]
    pub const fn bankroll(&self) -> u32 {
        self.bankroll
    }

    /// Returns the base bet declared for the current game.
    #[must_use]
    pub const fn base_bet(&self) -> u32 {
        self.base_bet
    }

    /// Returns the hands finished so far this game.
    #[must_use]
    pub fn hands(&self) -> &[HandRecord] {
        &self.hands
    }

    /// Returns the two cards dealt at the start of the game.
    #[must_use]
    pub const fn starting_hand(&self) -> Option<[Card; 2]> {
        self.starting_hand
    }

    /// Returns whether the player can put one more base bet on the table.
    #[must_use]
    pub const fn can_cover_base_bet(&self) -> bool {
        self.bankroll >= self.base_bet
    }

    /// Declares the base bet for this game.
    ///
    /// No money moves yet; it is drawn from the bankroll hand by hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the bankroll.
    pub const fn declare_base_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }
        self.base_bet = amount;
        Ok(())
    }

    /// Moves one base bet from the bankroll onto the table and returns it.
    ///
    /// The dealer stakes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if no base bet has been declared or the bankroll
    /// cannot cover it.
    pub const fn stake_base_bet(&mut self) -> Result<u32, BetError> {
        if self.is_dealer() {
            return Ok(0);
        }
        if self.base_bet == 0 {
            return Err(BetError::NoBaseBet);
        }
        if self.bankroll < self.base_bet {
            return Err(BetError::InsufficientFunds);
        }
        self.bankroll -= self.base_bet;
        Ok(self.base_bet)
    }

    /// Returns money to the bankroll.
    pub const fn credit(&mut self, amount: u32) {
        self.bankroll = self.bankroll.saturating_add(amount);
    }

    /// Records the starting cards for this game.
    pub const fn set_starting_hand(&mut self, cards: [Card; 2]) {
        self.starting_hand = Some(cards);
    }

    /// Records a finished hand.
    pub fn push_hand(&mut self, record: HandRecord) {
        self.hands.push(record);
    }

    /// Clears everything tied to a single game. The bankroll is kept.
    pub fn reset_game(&mut self) {
        self.opening_bankroll = self.bankroll;
        self.base_bet = 0;
        self.hands.clear();
        self.starting_hand = None;
    }

    /// Puts the bankroll back to what it was when the game began.
    pub const fn restore_bankroll(&mut self) {
        self.bankroll = self.opening_bankroll;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_base_bet_checks_bounds() {
        let mut player = Player::new(Seat::Player(1), 100);
        assert_eq!(player.declare_base_bet(0), Err(BetError::ZeroBet));
        assert_eq!(
            player.declare_base_bet(101),
            Err(BetError::InsufficientFunds)
        );
        assert_eq!(player.declare_base_bet(100), Ok(()));
        assert_eq!(player.base_bet(), 100);
        assert_eq!(player.bankroll(), 100);
    }

    #[test]
    fn staking_draws_from_bankroll() {
        let mut player = Player::new(Seat::Player(1), 100);
        assert_eq!(player.stake_base_bet(), Err(BetError::NoBaseBet));

        player.declare_base_bet(10).unwrap();
        assert_eq!(player.stake_base_bet(), Ok(10));
        assert_eq!(player.bankroll(), 90);
        assert_eq!(player.stake_base_bet(), Ok(10));
        assert_eq!(player.bankroll(), 80);
    }

    #[test]
    fn dealer_stakes_nothing() {
        let mut dealer = Player::dealer();
        assert_eq!(dealer.stake_base_bet(), Ok(0));
        assert_eq!(dealer.bankroll(), 0);
        assert_eq!(dealer.id(), 0);
    }

    #[test]
    fn reset_keeps_bankroll() {
        let mut player = Player::new(Seat::Player(3), 50);
        player.declare_base_bet(20).unwrap();
        player.stake_base_bet().unwrap();
        player.push_hand(HandRecord::new(Vec::new(), 20, false, Outcome::Busted));

        player.reset_game();
        assert_eq!(player.bankroll(), 30);
        assert_eq!(player.base_bet(), 0);
        assert!(player.hands().is_empty());
        assert!(player.starting_hand().is_none());
    }

    #[test]
    fn restore_undoes_the_current_game() {
        let mut player = Player::new(Seat::Player(1), 100);
        player.reset_game();
        player.declare_base_bet(25).unwrap();
        player.stake_base_bet().unwrap();
        player.stake_base_bet().unwrap();
        player.credit(10);
        assert_eq!(player.bankroll(), 60);

        player.restore_bankroll();
        assert_eq!(player.bankroll(), 100);
    }

    #[test]
    fn seat_display() {
        use alloc::string::ToString;

        assert_eq!(Seat::Dealer.to_string(), "Dealer");
        assert_eq!(Seat::Player(2).to_string(), "Player 2");
        assert!(Seat::Player(2) > Seat::Dealer);
    }
}
