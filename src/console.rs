//! Line-oriented terminal front end.
//!
//! [`Console`] implements [`Controller`] on top of any reader and writer.
//! Every prompt re-asks until it gets a usable answer; malformed input is
//! never an error.

use std::io::{BufRead, Write};

use core::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::card::Card;
use crate::error::{GameError, InputError};
use crate::game::{Controller, Decision, Move, RoundEvent, SplitOffer, Table};
use crate::hand::Outcome;
use crate::player::{Player, Seat};
use crate::result::ShowdownReport;

/// Why a typed bet was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetRejection {
    /// The text is not a number at all.
    #[error("That is not a number. Please try again")]
    NotANumber,
    /// The number has a fractional part.
    #[error("That is not a whole number. Please try again")]
    NotWhole,
    /// The number is zero or negative.
    #[error("Bet must be greater than zero. Please try again")]
    NotPositive,
    /// The number is more than the bankroll.
    #[error("Insufficient funds. Please try again")]
    InsufficientFunds,
}

/// Parses a typed bet against the player's bankroll.
///
/// Whole numbers written with a zero fraction, like `12.0`, are accepted.
/// Exponent forms such as `1e1` are not whole numbers, and a leading `+`
/// is not a number.
///
/// # Errors
///
/// Returns the reason the text is not a usable bet.
///
/// ```
/// use blackjack_table::console::{BetRejection, parse_bet};
///
/// assert_eq!(parse_bet("25", 100), Ok(25));
/// assert_eq!(parse_bet("2.5", 100), Err(BetRejection::NotWhole));
/// ```
pub fn parse_bet(input: &str, bankroll: u32) -> Result<u32, BetRejection> {
    let text = input.trim();
    let value: f64 = text.parse().map_err(|_| BetRejection::NotANumber)?;

    if !value.is_finite() {
        return Err(BetRejection::NotANumber);
    }
    if text.contains(['e', 'E']) {
        return Err(BetRejection::NotWhole);
    }
    let decimal = text
        .strip_prefix('-')
        .unwrap_or(text)
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.');
    if !decimal {
        return Err(BetRejection::NotANumber);
    }
    if value.fract() != 0.0 {
        return Err(BetRejection::NotWhole);
    }
    if value <= 0.0 {
        return Err(BetRejection::NotPositive);
    }
    if value > f64::from(bankroll) {
        return Err(BetRejection::InsufficientFunds);
    }

    Ok(value as u32)
}

/// A terminal controller reading answers from `R` and writing to `W`.
///
/// A failed write is remembered and reported as [`InputError::Write`] at
/// the next prompt, which ends the session.
pub struct Console<R, W> {
    input: R,
    output: W,
    write_failed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            write_failed: false,
        }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the players quit.
    ///
    /// A game that runs out of cards is voided and every bankroll goes
    /// back to where it stood before that game. Running out of input
    /// counts as quitting.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the table rejects
    /// a decision.
    pub fn run(&mut self, table: &mut Table) -> Result<(), GameError> {
        self.say(format_args!("Welcome to Blackjack!"));

        loop {
            let players = match self.player_count(table.options.seats) {
                Ok(Some(players)) => players,
                Ok(None) | Err(InputError::Closed) => return Ok(()),
                Err(err) => return Err(err.into()),
            };

            match table.play_game(players, self) {
                Ok(report) => self.render_showdown(&report),
                Err(GameError::Deck(err)) => {
                    warn!(%err, "voiding game");
                    table.void_game();
                    self.say(format_args!(
                        "The deck ran out of cards. This game is void and all bets are returned."
                    ));
                }
                Err(GameError::Input(InputError::Closed)) => {
                    table.void_game();
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Asks how many players join the next game; `None` means quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub fn player_count(&mut self, seats: u8) -> Result<Option<usize>, InputError> {
        self.say(format_args!(
            "Please enter the number of players (1-{seats}) or enter 'q' to quit."
        ));
        loop {
            let line = self.read_line()?;
            let answer = line.trim();
            if answer == "q" {
                return Ok(None);
            }
            match answer.parse::<u8>() {
                Ok(count) if (1..=seats).contains(&count) => return Ok(Some(usize::from(count))),
                _ => {
                    self.say(format_args!("Invalid input. Please try again."));
                    self.say(format_args!(
                        "Enter a number (1-{seats}) or enter 'q' to quit."
                    ));
                }
            }
        }
    }

    /// Asks a yes/no question that has already been printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub fn yes_or_no(&mut self) -> Result<bool, InputError> {
        loop {
            match self.read_line()?.trim() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {
                    self.say(format_args!("Invalid input. Please try again."));
                    self.say(format_args!("'y' for yes, 'n' for no."));
                }
            }
        }
    }

    /// Prints the final hands of a game.
    pub fn render_showdown(&mut self, report: &ShowdownReport) {
        for summary in &report.players {
            let outcomes = summary
                .outcomes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.say(format_args!("{}: {outcomes}", summary.seat));
        }

        self.say(format_args!("== Comparing hands =="));
        if report.dealer_blackjack() {
            self.say(format_args!("The dealer has a blackjack"));
        }
        for summary in report.human_players() {
            for outcome in &summary.outcomes {
                let ending = match outcome {
                    Outcome::Numeric(value) => format!("of {value}"),
                    Outcome::Blackjack => "that is a blackjack!".to_string(),
                    Outcome::Busted => "that busted!".to_string(),
                    Outcome::Surrendered => "that was surrendered.".to_string(),
                };
                self.say(format_args!("{}: You have a hand {ending}", summary.seat));
            }
        }
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        if self.output.flush().is_err() {
            self.write_failed = true;
        }
        if self.write_failed {
            return Err(InputError::Write);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line),
            Err(err) => {
                debug!(%err, "console read failed");
                Err(InputError::Read)
            }
        }
    }

    fn say(&mut self, text: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.output, "{text}") {
            debug!(%err, "console write failed");
            self.write_failed = true;
        }
    }
}

/// "You" for players, "They" for the dealer.
const fn pronoun(seat: Seat) -> &'static str {
    if seat.is_dealer() { "They" } else { "You" }
}

struct WithArticle(Card);

impl fmt::Display for WithArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.article(), self.0)
    }
}

impl<R: BufRead, W: Write> Controller for Console<R, W> {
    fn base_bet(&mut self, player: &Player) -> Result<u32, InputError> {
        self.say(format_args!(
            "Player {}: You have ${} to bet from.",
            player.id(),
            player.bankroll()
        ));
        loop {
            let line = self.read_line()?;
            match parse_bet(&line, player.bankroll()) {
                Ok(amount) => return Ok(amount),
                Err(rejection) => self.say(format_args!("{rejection}")),
            }
        }
    }

    fn offer_split(&mut self, offer: &SplitOffer) -> Result<bool, InputError> {
        self.say(format_args!("Would you like to split your two cards (y/n)"));
        self.say(format_args!(
            "It will cost another bet of ${}. You have ${} in your account.",
            offer.cost, offer.bankroll
        ));
        self.yes_or_no()
    }

    fn choose_move(&mut self, decision: &Decision<'_>) -> Result<Move, InputError> {
        self.say(format_args!("You are currently at {}", decision.score));
        self.say(format_args!("What would you like to do?"));
        let prompt = decision.legal.prompt();
        loop {
            self.say(format_args!("{prompt}"));
            let line = self.read_line()?;
            match Move::parse(&line) {
                Some(mv) if decision.legal.allows(mv) => return Ok(mv),
                Some(_) => self.say(format_args!(
                    "That move is not legal at the moment. Try again"
                )),
                None => self.say(format_args!("Invalid input. Try again")),
            }
        }
    }

    fn notify(&mut self, event: &RoundEvent) {
        match *event {
            RoundEvent::SatOut { seat } => {
                self.say(format_args!(
                    "{seat}: You are out of money and sit this game out."
                ));
            }
            RoundEvent::TurnStarted { seat } => match seat {
                Seat::Dealer => self.say(format_args!("Dealer's turn.")),
                Seat::Player(id) => self.say(format_args!("Player {id}'s turn.")),
            },
            RoundEvent::StartingCards { seat, cards: [first, second] } => {
                if !seat.is_dealer() {
                    self.say(format_args!(
                        "You got {} and {}.",
                        WithArticle(first),
                        WithArticle(second)
                    ));
                }
            }
            RoundEvent::Blackjack { seat } => {
                let cheer = if seat.is_dealer() {
                    "The house wins."
                } else {
                    "Lucky you."
                };
                self.say(format_args!("That's a blackjack! {cheer}"));
            }
            RoundEvent::DealerShows { card } => {
                self.say(format_args!(
                    "The dealer has {} face up.",
                    WithArticle(card)
                ));
            }
            RoundEvent::SplitUnaffordable { .. } => {
                self.say(format_args!(
                    "You do not have enough money to place another bet for a split."
                ));
            }
            RoundEvent::Split { aces, .. } => {
                if aces {
                    self.say(format_args!(
                        "You split your aces. Neither hand may draw more cards."
                    ));
                } else {
                    self.say(format_args!("You split your pair."));
                }
            }
            RoundEvent::Drew { seat, card } => {
                self.say(format_args!("{} drew {}.", pronoun(seat), WithArticle(card)));
            }
            RoundEvent::HitTwentyOne { seat } => {
                let remark = if seat.is_dealer() { "Oof!" } else { "Nice!" };
                self.say(format_args!("{} hit 21. {remark}", pronoun(seat)));
            }
            RoundEvent::Busted { seat } => {
                self.say(format_args!("{} have busted.", pronoun(seat)));
            }
            RoundEvent::Surrendered { refund, .. } => {
                self.say(format_args!(
                    "You surrendered and get ${refund} back."
                ));
            }
        }
    }
}
