//! Console blackjack against the dealer.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{GameOptions, GameState, Hand, Round, Shoe, parse_wager};

const STARTING_BALANCE: usize = 100;

fn main() {
    env_logger::init();
    println!("Blackjack console (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut shoe = Shoe::new(&options, seed);
    let mut balance = STARTING_BALANCE;

    while matches!(
        prompt_line("Do you want to play a game of Blackjack? (y/n): ").as_str(),
        "y" | "yes"
    ) {
        let mut round = Round::with_options(shoe, options.clone());
        balance = play_round(&mut round, balance);
        if round.reshuffled() {
            println!("The shoe was reshuffled.");
        }
        shoe = round.into_shoe();

        println!("Your remaining money: {balance}");
        if balance == 0 {
            println!("You are out of money! Game over.");
            break;
        }
    }
}

fn play_round(round: &mut Round, balance: usize) -> usize {
    let mut balance = loop {
        let input = prompt_line(&format!("Enter your bet (1-{balance}): "));
        let amount = match parse_wager(&input) {
            Ok(amount) => amount,
            Err(err) => {
                println!("Invalid bet: {err}.");
                continue;
            }
        };
        match round.place_bet(amount, balance) {
            Ok(remaining) => break remaining,
            Err(err) => println!("Bet error: {err}."),
        }
    };

    if let Err(err) = round.deal_initial() {
        println!("Deal error: {err}");
        return balance + round.wager();
    }

    while round.state() == GameState::PlayerTurn {
        print_table(round);
        let result = match prompt_line("Type 'y' to get another card, 'n' to pass: ").as_str() {
            "y" | "h" | "hit" => round.player_hit().map(|_| ()),
            _ => round.player_stand(),
        };
        if let Err(err) = result {
            println!("Action error: {err}");
            return balance + round.wager();
        }
    }

    if let Err(err) = round.run_dealer_turn() {
        println!("Dealer error: {err}");
        return balance + round.wager();
    }

    match round.settle() {
        Ok(settlement) => {
            println!(
                "   Your final hand: {}, final score: {}",
                format_hand(round.player()),
                settlement.player_score
            );
            println!(
                "   Dealer's final hand: {}, final score: {}",
                format_hand(round.dealer()),
                settlement.dealer_score
            );
            println!("{settlement} (net {:+})", settlement.net());
            balance += settlement.payout;
        }
        Err(err) => {
            println!("Showdown error: {err}");
            balance += round.wager();
        }
    }

    balance
}

fn print_table(round: &Round) {
    let player = round.player();
    println!(
        "   Your cards: {}, current score: {}",
        format_hand(player),
        player.score()
    );
    if let Some(card) = round.dealer().up_card() {
        println!("   Dealer's first card: {card}");
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    match read_answer(&mut io::stdin().lock()) {
        Some(input) => input,
        None => std::process::exit(0),
    }
}

/// Reads one trimmed, lowercased answer. Returns `None` when the player
/// quits or the input is closed or unreadable.
fn read_answer(reader: &mut impl BufRead) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }
    let input = input.trim().to_lowercase();
    if input == "q" || input == "quit" {
        return None;
    }
    Some(input)
}
