//! Terminal front end tests driven by canned input.

use std::io::Cursor;

use blackjack_table::console::Console;
use blackjack_table::{Card, Deck, Rank, Suit, Table, TableOptions};

type Script = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> Script {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn printed(console: Script) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Plays one game for one player over a known deck and returns the transcript.
fn transcript(draws: Vec<Card>, input: &str) -> String {
    let mut table = Table::new(TableOptions::default(), 9);
    table.begin_game(1).unwrap();
    table.replace_deck(Deck::from_order(draws));

    let mut console = console(input);
    table.collect_bets(&mut console).unwrap();
    table.deal().unwrap();
    table.play_turns(&mut console).unwrap();
    let report = table.showdown();
    console.render_showdown(&report);
    printed(console)
}

#[test]
fn hitting_twenty_one() {
    let text = transcript(
        vec![
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Clubs, Rank::Six),
        ],
        "10\nstand\n",
    );

    assert!(text.starts_with("Player 1: You have $100 to bet from.\nPlayer 1's turn.\n"));
    assert!(text.contains("You got a 7 of hearts and an 8 of spades.\n"));
    assert!(text.contains("The dealer has a 10 of clubs face up.\n"));
    assert!(text.contains("You are currently at 15\n"));
    assert!(text.contains(
        "You can \"Stand\", \"Fold\", \"Double down\", or \"Surrender\"\n"
    ));
    assert!(text.contains("You drew a 6 of clubs.\nYou hit 21. Nice!\n"));
    assert!(text.contains("Dealer's turn.\n"));
    assert!(text.contains("Player 1: 21\nDealer: 17\n== Comparing hands ==\n"));
    assert!(text.contains("Player 1: You have a hand of 21\n"));
    assert!(!text.contains("The dealer has a blackjack"));
}

#[test]
fn dealer_draws_out_loud() {
    let text = transcript(
        vec![
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Clubs, Rank::King),
        ],
        "10\nFold\n",
    );

    assert!(text.contains("They drew a king of clubs.\nThey have busted.\n"));
    assert!(text.contains("Dealer: busted\n"));
    assert!(text.contains("Player 1: You have a hand of 19\n"));
}

#[test]
fn splitting_a_pair() {
    let text = transcript(
        vec![
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Two),
        ],
        "10\nyes\ny\nfold\nfold\n",
    );

    assert!(text.contains("Would you like to split your two cards (y/n)\n"));
    assert!(text.contains("It will cost another bet of $10. You have $90 in your account.\n"));
    assert!(text.contains("'y' for yes, 'n' for no.\n"));
    assert!(text.contains("You split your pair.\n"));
    assert!(text.contains("You got an 8 of hearts and a 3 of hearts.\n"));
    assert!(text.contains("You got an 8 of diamonds and a 2 of clubs.\n"));
    assert!(text.contains("Player 1: 11, 10\n"));
}

#[test]
fn blackjack_and_surrender_lines() {
    let text = transcript(
        vec![
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Six),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::Queen),
        ],
        "20\nsurrender\n",
    );

    assert!(text.contains("You surrendered and get $10 back.\n"));
    assert!(text.contains("The dealer has an ace of clubs face up.\n"));
    assert!(text.contains("That's a blackjack! The house wins.\n"));
    assert!(text.contains("The dealer has a blackjack\n"));
    assert!(text.contains("Player 1: You have a hand that was surrendered.\n"));
}

#[test]
fn quitting_right_away() {
    let mut table = Table::new(TableOptions::default(), 1);
    let mut console = console("q\n");
    console.run(&mut table).unwrap();

    assert_eq!(
        printed(console),
        "Welcome to Blackjack!\n\
         Please enter the number of players (1-4) or enter 'q' to quit.\n"
    );
}

#[test]
fn end_of_input_quits() {
    let mut table = Table::new(TableOptions::default(), 1);
    let mut console = console("");
    assert!(console.run(&mut table).is_ok());

    let mut console = self::console("1\n30\n");
    assert!(console.run(&mut table).is_ok());
    assert!(printed(console).contains("Player 1: You have $100 to bet from.\n"));
}

#[test]
fn whole_session() {
    let mut table = Table::new(TableOptions::default(), 2024);
    let mut console = console("1\n10\nfold\nq\n");
    console.run(&mut table).unwrap();

    let text = printed(console);
    assert!(text.starts_with(
        "Welcome to Blackjack!\n\
         Please enter the number of players (1-4) or enter 'q' to quit.\n\
         Player 1: You have $100 to bet from.\n"
    ));
    assert!(text.contains("Player 1's turn.\n"));
}
