//! Round integration tests.

use bjsim::{
    ActionError, BetError, Card, DECK_SIZE, GameOptions, GameState, Outcome, Rank, Round,
    Settlement, Shoe, ShowdownError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a round whose shoe deals `draws` in order, then places a bet.
///
/// Opening cards go player, dealer, player, dealer.
fn stacked_round(draws: &[Card], wager: usize, balance: usize) -> (Round, usize) {
    let options = GameOptions::default().with_reshuffle_below(0);
    let mut shoe = Shoe::new(&options, 1);
    shoe.stack(draws).unwrap();

    let mut round = Round::with_options(shoe, options);
    let balance = round.place_bet(wager, balance).unwrap();
    round.deal_initial().unwrap();
    (round, balance)
}

fn finish(round: &mut Round, balance: usize) -> (Settlement, usize) {
    if round.state() == GameState::PlayerTurn {
        round.player_stand().unwrap();
    }
    round.run_dealer_turn().unwrap();
    let settlement = round.settle().unwrap();
    (settlement, balance + settlement.payout)
}

#[test]
fn equal_scores_push() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::King),    // player
            card(Suit::Clubs, Rank::Ten),      // dealer up
            card(Suit::Diamonds, Rank::Queen), // player
            card(Suit::Spades, Rank::King),    // dealer hole
        ],
        50,
        150,
    );
    assert_eq!(balance, 100);

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.outcome, Outcome::Push);
    assert_eq!(settlement.label(), "Draw");
    assert_eq!(settlement.net(), 0);
    assert_eq!(balance, 150);
}

#[test]
fn player_natural_pays_three_to_two() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Spades, Rank::Eight),
        ],
        50,
        100,
    );
    assert_eq!(round.state(), GameState::DealerTurn);

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.outcome, Outcome::PlayerBlackjack);
    assert!(settlement.label().contains("Blackjack"));
    assert_eq!(settlement.payout, 125);
    assert_eq!(balance, 175);
}

#[test]
fn blackjack_bonus_rounds_down() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Spades, Rank::Seven),
        ],
        5,
        5,
    );

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.payout, 5 + 7);
    assert_eq!(balance, 12);
}

#[test]
fn dealer_natural_loses_wager() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Spades, Rank::King),
        ],
        50,
        150,
    );

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.label(), "Lose, opponent has Blackjack");
    assert_eq!(settlement.player_score, 20);
    assert_eq!(settlement.dealer_score, 21);
    assert_eq!(balance, 100);
}

#[test]
fn player_bust_loses() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Hearts, Rank::King), // player hit
        ],
        50,
        150,
    );

    let hit = round.player_hit().unwrap();
    assert_eq!(hit.rank, Rank::King);
    assert_eq!(round.player().score(), 22);
    assert_eq!(round.state(), GameState::DealerTurn);

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.label(), "You went over. You lose");
    assert_eq!(balance, 100);
}

#[test]
fn dealer_bust_pays_even_money() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Spades, Rank::Two),
            card(Suit::Hearts, Rank::Queen), // dealer draw
        ],
        50,
        150,
    );

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.dealer_score, 22);
    assert_eq!(settlement.label(), "Opponent went over. You win");
    assert_eq!(balance, 200);
}

#[test]
fn higher_score_wins() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Spades, Rank::Eight),
        ],
        50,
        150,
    );

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.label(), "You win");
    assert_eq!(settlement.to_string(), "You win");
    assert_eq!(balance, 200);
}

#[test]
fn lower_score_loses() {
    let (mut round, balance) = stacked_round(
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::King),
        ],
        50,
        150,
    );

    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.outcome, Outcome::DealerHigher);
    assert_eq!(settlement.label(), "You lose");
    assert_eq!(settlement.net(), -50);
    assert_eq!(balance, 100);
}

#[test]
fn bet_errors() {
    let shoe = Shoe::new(&GameOptions::default(), 1);
    let mut round = Round::new(shoe);

    assert_eq!(round.place_bet(0, 100).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        round.place_bet(150, 100).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(round.state(), GameState::Betting);
    assert_eq!(round.place_bet(100, 100), Ok(0));
}

#[test]
fn oversized_wager_is_refused_before_the_deal() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::King),
        card(Suit::Spades, Rank::Eight),
    ];
    let options = GameOptions::default().with_reshuffle_below(0);
    let mut shoe = Shoe::new(&options, 1);
    shoe.stack(&draws).unwrap();
    let mut round = Round::with_options(shoe, options);

    assert_eq!(
        round.place_bet(usize::MAX, usize::MAX),
        Err(BetError::Unpayable)
    );
    assert_eq!(round.state(), GameState::Betting);

    // Even-money and natural payouts on this wager both fit.
    let wager = usize::MAX / 3;
    let balance = round.place_bet(wager, wager).unwrap();
    round.deal_initial().unwrap();
    let (settlement, balance) = finish(&mut round, balance);
    assert_eq!(settlement.outcome, Outcome::PlayerHigher);
    assert_eq!(balance, wager * 2);
}

#[test]
fn options_describe_the_round_shoe() {
    let shoe = Shoe::new(&GameOptions::default().with_decks(8), 5);
    let options = GameOptions::default()
        .with_decks(2)
        .with_reshuffle_below(1)
        .with_stand_on_soft_17(false);
    let round = Round::with_options(shoe, options);

    assert_eq!(round.options().decks, round.shoe().decks());
    assert_eq!(round.options().decks, 8);
    assert_eq!(round.options().reshuffle_below, 4);
    assert!(!round.options().stand_on_soft_17);
}

#[test]
fn two_deck_shoe_plays_a_round_without_reshuffling() {
    let options = GameOptions::default().with_decks(2);
    let shoe = Shoe::new(&options, 11);
    let mut round = Round::with_options(shoe, options);

    let balance = round.place_bet(10, 100).unwrap();
    round.deal_initial().unwrap();
    let (settlement, _) = finish(&mut round, balance);

    assert!(!round.reshuffled());
    assert_eq!(settlement.wager, 10);
    assert_eq!(
        round.shoe().cards_remaining(),
        2 * DECK_SIZE - round.player().len() - round.dealer().len()
    );
}

#[test]
fn actions_out_of_turn_are_rejected() {
    let shoe = Shoe::new(&GameOptions::default(), 2);
    let mut round = Round::new(shoe);

    assert_eq!(round.player_hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.player_stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        round.run_dealer_turn().unwrap_err(),
        ShowdownError::InvalidState
    );
    assert_eq!(round.settle().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn new_shoe_has_every_card() {
    for decks in [1_u8, 4, 8] {
        let shoe = Shoe::new(&GameOptions::default().with_decks(decks), 3);
        assert_eq!(shoe.cards_remaining(), DECK_SIZE * usize::from(decks));
    }
}

#[test]
fn short_stack_reshuffles_before_the_deal() {
    let options = GameOptions::default();
    let mut shoe = Shoe::new(&options, 4);
    shoe.stack(&[card(Suit::Clubs, Rank::Two); 10]).unwrap();

    let mut round = Round::with_options(shoe, options);
    assert!(!round.reshuffled());
    round.place_bet(10, 10).unwrap();
    round.deal_initial().unwrap();

    assert!(round.reshuffled());
    assert_eq!(round.shoe().cards_remaining(), 416 - 4);
}

#[test]
fn shoe_carries_across_rounds() {
    let options = GameOptions::default();
    let mut shoe = Shoe::new(&options, 2024);
    let mut balance = 10_000;
    let wager = 10;

    for _ in 0..80 {
        let before = balance;
        let mut round = Round::with_options(shoe, options.clone());
        balance = round.place_bet(wager, balance).unwrap();
        round.deal_initial().unwrap();

        while round.state() == GameState::PlayerTurn {
            if round.player().score() < 17 {
                round.player_hit().unwrap();
            } else {
                round.player_stand().unwrap();
            }
        }

        round.run_dealer_turn().unwrap();
        let settlement = round.settle().unwrap();
        balance += settlement.payout;

        assert!(settlement.payout <= wager + wager * 3 / 2);
        assert_eq!(settlement.outcome.is_win(), settlement.net() > 0);
        assert_eq!(balance as isize - before as isize, settlement.net());
        assert!(round.dealer().score() >= 17);

        shoe = round.into_shoe();
        assert!(shoe.cards_remaining() < shoe.capacity());
    }

    assert!(shoe.reshuffle_count() >= 1);
}
