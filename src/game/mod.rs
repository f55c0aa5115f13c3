//! Table orchestration and the round engine.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::deck::Deck;
use crate::error::GameError;
use crate::options::TableOptions;
use crate::player::{Player, Seat};
use crate::result::{PlayerSummary, ShowdownReport};

mod controller;
mod moves;
mod round;

pub use controller::{Controller, Decision, RoundEvent, SplitOffer};
pub use moves::{DEALER_STANDS_ON, LegalMoves, Move, dealer_move};

/// A blackjack table: the dealer, the player seats and one deck.
///
/// The table owns its random generator, so two tables built with the same
/// seed shuffle identically. A game runs in stages: [`Table::begin_game`],
/// [`Table::collect_bets`], [`Table::deal`], [`Table::play_turns`] and
/// [`Table::showdown`]. [`Table::play_game`] runs them all.
///
/// # Example
///
/// ```no_run
/// use blackjack_table::{Table, TableOptions};
///
/// let table = Table::new(TableOptions::default(), 42);
/// assert_eq!(table.players().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// The deck, reshuffled every game.
    deck: Deck,
    /// Slot 0 is the dealer, slots 1 and up are players.
    players: Vec<Player>,
    /// Players taking part in the current game, highest seat first.
    in_play: Vec<Seat>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with the given seed.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut players = Vec::with_capacity(usize::from(options.seats) + 1);
        players.push(Player::dealer());
        for id in 1..=options.seats {
            players.push(Player::new(Seat::Player(id), options.starting_bankroll));
        }

        Self {
            options,
            deck: Deck::new(),
            players,
            in_play: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns every participant, dealer first.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the participant in the given seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(usize::from(seat.slot()))
    }

    /// Returns the dealer.
    #[must_use]
    pub fn dealer(&self) -> Option<&Player> {
        self.player(Seat::Dealer)
    }

    /// Returns the players taking part in the current game.
    #[must_use]
    pub fn in_play(&self) -> &[Seat] {
        &self.in_play
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the deck, e.g. to replay a known card order.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Starts a game for the first `players` seats.
    ///
    /// Clears the previous game's bets and hands and shuffles a fresh deck.
    /// Bankrolls carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is zero or more than the table seats.
    pub fn begin_game(&mut self, players: usize) -> Result<(), GameError> {
        let seats = usize::from(self.options.seats);
        if players == 0 || players > seats {
            return Err(GameError::InvalidPlayerCount {
                requested: players,
                max: seats,
            });
        }

        for player in &mut self.players {
            player.reset_game();
        }
        self.deck = Deck::new();
        self.deck.shuffle(&mut self.rng);
        self.in_play = (1..=players as u8).rev().map(Seat::Player).collect();

        info!(players, "game started");
        Ok(())
    }

    /// Asks each player in the game for a base bet, highest seat first.
    ///
    /// Players with an empty bankroll sit the game out.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller fails or offers an invalid bet.
    pub fn collect_bets<C: Controller + ?Sized>(
        &mut self,
        controller: &mut C,
    ) -> Result<(), GameError> {
        let mut betting = Vec::with_capacity(self.in_play.len());
        for &seat in &self.in_play {
            let Some(player) = self.players.get_mut(usize::from(seat.slot())) else {
                continue;
            };

            if player.bankroll() == 0 {
                debug!(%seat, "sitting out with an empty bankroll");
                controller.notify(&RoundEvent::SatOut { seat });
                continue;
            }

            let amount = controller.base_bet(player)?;
            player.declare_base_bet(amount)?;
            debug!(%seat, amount, "base bet declared");
            betting.push(seat);
        }
        self.in_play = betting;
        Ok(())
    }

    /// Deals two cards to each player in the game, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out.
    pub fn deal(&mut self) -> Result<(), GameError> {
        for seat in self.turn_order() {
            let first = self.deck.draw()?;
            let second = self.deck.draw()?;
            trace!(%seat, %first, %second, "dealt");
            if let Some(player) = self.players.get_mut(usize::from(seat.slot())) {
                player.set_starting_hand([first, second]);
            }
        }
        Ok(())
    }

    /// Plays every player's turn, highest seat first, then the dealer's.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the controller fails.
    pub fn play_turns<C: Controller + ?Sized>(
        &mut self,
        controller: &mut C,
    ) -> Result<(), GameError> {
        for seat in self.turn_order() {
            self.play_turn(seat, controller)?;
        }
        Ok(())
    }

    /// Lists the outcome of every hand played this game.
    #[must_use]
    pub fn showdown(&self) -> ShowdownReport {
        let players = self
            .turn_order()
            .into_iter()
            .filter_map(|seat| self.player(seat))
            .map(|player| PlayerSummary {
                seat: player.seat(),
                outcomes: player.hands().iter().map(|hand| hand.outcome()).collect(),
                bankroll: player.bankroll(),
            })
            .collect();

        ShowdownReport { players }
    }

    /// Runs a whole game for the first `players` seats.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is invalid, the deck runs out
    /// or the controller fails. Money staked before the failure stays
    /// staked; call [`Table::void_game`] to hand it back.
    pub fn play_game<C: Controller + ?Sized>(
        &mut self,
        players: usize,
        controller: &mut C,
    ) -> Result<ShowdownReport, GameError> {
        self.begin_game(players)?;
        self.collect_bets(controller)?;
        self.deal()?;
        self.play_turns(controller)?;
        Ok(self.showdown())
    }

    /// Abandons the current game and returns every bankroll to where it
    /// stood when the game began.
    pub fn void_game(&mut self) {
        for player in &mut self.players {
            player.restore_bankroll();
            player.reset_game();
        }
        self.in_play.clear();
    }

    /// Players in the game, highest seat first, then the dealer.
    fn turn_order(&self) -> Vec<Seat> {
        let mut order = self.in_play.clone();
        order.push(Seat::Dealer);
        order
    }
}
