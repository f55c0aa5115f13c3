//! Playing out one participant's hands, splits included.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use tracing::debug;

use crate::card::{Card, card_value};
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::{Outcome, TWENTY_ONE, can_split, is_top_draw_blackjack};
use crate::player::{HandRecord, Player, Seat};

use super::controller::{Controller, Decision, RoundEvent, SplitOffer};
use super::moves::{LegalMoves, Move, dealer_move};
use super::Table;

/// A hand waiting to be played.
#[derive(Debug, Clone, Copy)]
struct PendingHand {
    first: Card,
    /// `None` for split hands until they are reached.
    second: Option<Card>,
    /// Bet pool already on the hand; 0 means not staked yet.
    bet: u32,
    ace_split: bool,
    split_allowed: bool,
}

/// One participant's turn, borrowing what it needs from the table.
struct Turn<'a, C: ?Sized> {
    seat: Seat,
    dealer_up: Option<Card>,
    deck: &'a mut Deck,
    player: &'a mut Player,
    controller: &'a mut C,
}

impl Table {
    /// Plays every hand of one participant.
    ///
    /// Hands are worked off a queue seeded with the starting hand. A split
    /// replaces the front of the queue with its two hands, so the first
    /// split hand is finished before the second one gets its card.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat is unknown or has no cards, the deck
    /// runs out, the controller fails, or the controller picks an illegal
    /// move.
    pub fn play_turn<C: Controller + ?Sized>(
        &mut self,
        seat: Seat,
        controller: &mut C,
    ) -> Result<(), GameError> {
        let dealer_up = self
            .dealer()
            .and_then(Player::starting_hand)
            .map(|[up, _]| up);

        let Self { deck, players, .. } = self;
        let player = players
            .get_mut(usize::from(seat.slot()))
            .ok_or(GameError::UnknownSeat(seat))?;
        let [first, second] = player.starting_hand().ok_or(GameError::NotDealt(seat))?;

        controller.notify(&RoundEvent::TurnStarted { seat });

        let turn = Turn {
            seat,
            dealer_up,
            deck,
            player,
            controller,
        };
        turn.run(PendingHand {
            first,
            second: Some(second),
            bet: 0,
            ace_split: false,
            split_allowed: !seat.is_dealer(),
        })
    }
}

impl<C: Controller + ?Sized> Turn<'_, C> {
    fn run(mut self, starting: PendingHand) -> Result<(), GameError> {
        let mut queue = VecDeque::from([starting]);

        while let Some(pending) = queue.pop_front() {
            let second = match pending.second {
                Some(card) => card,
                None => self.deck.draw()?,
            };
            let bet = if pending.bet == 0 {
                self.player.stake_base_bet()?
            } else {
                pending.bet
            };
            let cards = [pending.first, second];

            self.controller.notify(&RoundEvent::StartingCards {
                seat: self.seat,
                cards,
            });

            if is_top_draw_blackjack(pending.first, second) {
                self.controller
                    .notify(&RoundEvent::Blackjack { seat: self.seat });
                self.finish(cards.to_vec(), bet, pending.ace_split, Outcome::Blackjack);
                continue;
            }

            if let Some(card) = self.dealer_up {
                self.controller.notify(&RoundEvent::DealerShows { card });
            }

            if pending.split_allowed && can_split(pending.first, second) {
                if let Some([left, right]) = self.offer_split(cards, bet)? {
                    queue.push_front(right);
                    queue.push_front(left);
                    continue;
                }
            }

            let outcome = self.play_out(cards, bet, pending.ace_split)?;
            debug!(seat = %self.seat, ?outcome, "hand finished");
        }

        Ok(())
    }

    /// Offers a split and, if taken, returns the two new hands.
    fn offer_split(
        &mut self,
        cards: [Card; 2],
        bet: u32,
    ) -> Result<Option<[PendingHand; 2]>, GameError> {
        if !self.player.can_cover_base_bet() {
            self.controller
                .notify(&RoundEvent::SplitUnaffordable { seat: self.seat });
            return Ok(None);
        }

        let offer = SplitOffer {
            seat: self.seat,
            cards,
            cost: self.player.base_bet(),
            bankroll: self.player.bankroll(),
        };
        if !self.controller.offer_split(&offer)? {
            return Ok(None);
        }

        let extra = self.player.stake_base_bet()?;
        let aces = cards[0].is_ace();
        self.controller.notify(&RoundEvent::Split {
            seat: self.seat,
            aces,
        });
        debug!(seat = %self.seat, aces, "pair split");

        let [left, right] = cards;
        Ok(Some([
            PendingHand {
                first: left,
                second: None,
                bet,
                ace_split: aces,
                split_allowed: false,
            },
            PendingHand {
                first: right,
                second: None,
                bet: extra,
                ace_split: aces,
                split_allowed: false,
            },
        ]))
    }

    /// Plays one hand to a terminal outcome and records it.
    ///
    /// The score is a running total: each card is valued against the total
    /// before it, so an ace once counted as 11 stays 11.
    fn play_out(
        &mut self,
        cards: [Card; 2],
        mut bet: u32,
        ace_split: bool,
    ) -> Result<Outcome, GameError> {
        let seat = self.seat;
        let mut held: Vec<Card> = cards.to_vec();
        let [first, second] = cards;
        let mut score = card_value(second, card_value(first, 0));

        let outcome = loop {
            if score == TWENTY_ONE {
                self.controller.notify(&RoundEvent::HitTwentyOne { seat });
                break Outcome::Numeric(score);
            }
            if score > TWENTY_ONE {
                self.controller.notify(&RoundEvent::Busted { seat });
                break Outcome::Busted;
            }

            let mv = self.next_move(score, &held, bet, ace_split)?;
            debug!(%seat, score, %mv, "move");

            match mv {
                Move::Stand => {
                    let card = self.deck.draw()?;
                    score = score.saturating_add(card_value(card, score));
                    held.push(card);
                    self.controller.notify(&RoundEvent::Drew { seat, card });
                }
                Move::Fold => break Outcome::Numeric(score),
                Move::DoubleDown => {
                    bet += self.player.stake_base_bet()?;
                    let card = self.deck.draw()?;
                    score = score.saturating_add(card_value(card, score));
                    held.push(card);
                    self.controller.notify(&RoundEvent::Drew { seat, card });

                    let outcome = Outcome::from_value(score);
                    if outcome == Outcome::Busted {
                        self.controller.notify(&RoundEvent::Busted { seat });
                    }
                    break outcome;
                }
                Move::Surrender => {
                    let refund = bet / 2;
                    self.player.credit(refund);
                    self.controller
                        .notify(&RoundEvent::Surrendered { seat, refund });
                    break Outcome::Surrendered;
                }
            }
        };

        self.finish(held, bet, ace_split, outcome);
        Ok(outcome)
    }

    /// Asks the controller for a human move, or applies the dealer policy.
    fn next_move(
        &mut self,
        score: u8,
        held: &[Card],
        bet: u32,
        ace_split: bool,
    ) -> Result<Move, GameError> {
        if self.seat.is_dealer() {
            return Ok(dealer_move(score));
        }

        let legal =
            LegalMoves::for_hand(held.len(), ace_split, self.player.can_cover_base_bet());
        let decision = Decision {
            seat: self.seat,
            score,
            cards: held,
            legal,
            bet,
            bankroll: self.player.bankroll(),
        };
        let mv = self.controller.choose_move(&decision)?;
        if !legal.allows(mv) {
            return Err(GameError::IllegalMove(mv));
        }
        Ok(mv)
    }

    fn finish(&mut self, cards: Vec<Card>, bet: u32, ace_split: bool, outcome: Outcome) {
        self.player
            .push_hand(HandRecord::new(cards, bet, ace_split, outcome));
    }
}
