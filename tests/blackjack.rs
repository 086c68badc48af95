//! Blackjack scoring and round flow tests.

use cardtable::{
    ActionError, Blackjack, Card, DEALER_NAME, DEALER_STAND_THRESHOLD, DECK_SIZE, Deck, Game,
    GameOptions, HandOutcome, Rank, RoundState, SharedTable, Suit, card_value, dealer_should_hit,
    hand_value,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Clears the opening round and deals the next one from `draws`, first card
/// first.
fn rigged_table(players: usize, draws: &[Card]) -> Blackjack {
    let mut table = Blackjack::new(players, 1).unwrap();
    table.clear_round();
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    table.replace_deck(Deck::from_cards(cards));
    table.deal().unwrap();
    table
}

#[test]
fn card_values() {
    assert_eq!(card_value(card(Rank::Two, Suit::Heart)), 2);
    assert_eq!(card_value(card(Rank::Nine, Suit::Club)), 9);
    assert_eq!(card_value(card(Rank::Ten, Suit::Club)), 10);
    assert_eq!(card_value(card(Rank::Jack, Suit::Diamond)), 10);
    assert_eq!(card_value(card(Rank::Queen, Suit::Spade)), 10);
    assert_eq!(card_value(card(Rank::King, Suit::Heart)), 10);
    assert_eq!(card_value(card(Rank::Ace, Suit::Heart)), 11);
}

#[test]
fn ace_counts_low_only_once() {
    let ace = card(Rank::Ace, Suit::Heart);
    let ace2 = card(Rank::Ace, Suit::Spade);
    let king = card(Rank::King, Suit::Club);
    let nine = card(Rank::Nine, Suit::Diamond);
    let five = card(Rank::Five, Suit::Club);

    assert_eq!(hand_value(&[]), 0);
    assert_eq!(hand_value(&[ace]), 11);
    assert_eq!(hand_value(&[ace, king]), 21);
    assert_eq!(hand_value(&[ace, ace2, nine]), 21);
    assert_eq!(hand_value(&[ace, ace2, king]), 22);
    assert_eq!(hand_value(&[ace, five, king]), 16);
    assert_eq!(hand_value(&[king, king, card(Rank::Two, Suit::Heart)]), 22);
}

#[test]
fn whole_deck_hand_value_does_not_saturate() {
    // 4 * (2 + ... + 9) + 16 * 10 + 4 * 11, less 10 for one ace.
    assert_eq!(hand_value(Deck::new().cards()), 370);

    let options = GameOptions::default().with_players(1).with_deal(false);
    let mut game = Game::new(options, 7).unwrap();
    for _ in 0..DECK_SIZE {
        game.draw_to_player(0).unwrap();
    }
    assert_eq!(hand_value(game.hand(0).unwrap()), 370);
}

#[test]
fn dealer_stands_on_seventeen() {
    assert_eq!(DEALER_STAND_THRESHOLD, 16);
    assert!(dealer_should_hit(16));
    assert!(dealer_should_hit(2));
    assert!(!dealer_should_hit(17));
    assert!(!dealer_should_hit(22));
}

#[test]
fn outcome_matrix() {
    assert_eq!(HandOutcome::resolve(17, 18), HandOutcome::Lose);
    assert_eq!(HandOutcome::resolve(18, 18), HandOutcome::Push);
    assert_eq!(HandOutcome::resolve(19, 18), HandOutcome::Win);
    assert_eq!(HandOutcome::resolve(22, 18), HandOutcome::Bust);

    for player in 2..=21 {
        assert_eq!(HandOutcome::resolve(player, 23), HandOutcome::Win);
    }
    assert_eq!(HandOutcome::resolve(22, 23), HandOutcome::Bust);

    assert_eq!(HandOutcome::Win.label(), "WINR");
    assert_eq!(HandOutcome::Bust.label(), "BUST");
}

#[test]
fn new_table_seats_dealer_last() {
    let table = Blackjack::new(2, 11).unwrap();
    let game = table.game();

    let names: Vec<&str> = game.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Player 1", "Player 2", DEALER_NAME]);
    assert_eq!(table.dealer_seat(), 2);
    assert_eq!(table.state(), RoundState::PlayerTurn);
    assert_eq!(game.turn(), 0);
    assert!(game.players().iter().all(|p| p.hand().len() == 2));
    assert_eq!(game.cards_remaining(), DECK_SIZE - 6);
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn same_seed_same_deal() {
    let first = Blackjack::new(2, 2024).unwrap();
    let second = Blackjack::new(2, 2024).unwrap();

    for seat in 0..3 {
        assert_eq!(first.game().hand(seat), second.game().hand(seat));
    }
    assert_eq!(first.game().deck(), second.game().deck());
}

#[test]
fn seed_2024_deals_known_hands() {
    let table = Blackjack::new(2, 2024).unwrap();
    let game = table.game();

    assert_eq!(
        game.hand(0).unwrap(),
        &[card(Rank::Ace, Suit::Club), card(Rank::King, Suit::Heart)]
    );
    assert_eq!(
        game.hand(1).unwrap(),
        &[card(Rank::Nine, Suit::Spade), card(Rank::Seven, Suit::Spade)]
    );
    assert_eq!(
        game.hand(2).unwrap(),
        &[card(Rank::Jack, Suit::Club), card(Rank::Six, Suit::Diamond)]
    );
    assert_eq!(game.deck().peek().unwrap(), card(Rank::Eight, Suit::Diamond));
    assert_eq!(table.current_value(), 21);
    assert_eq!(table.dealer_up_card(), Some(card(Rank::Six, Suit::Diamond)));
}

#[test]
fn dealer_draws_to_seventeen_then_showdown() {
    let mut table = rigged_table(
        2,
        &[
            card(Rank::Ten, Suit::Heart),
            card(Rank::Nine, Suit::Club),
            card(Rank::Six, Suit::Spade),
            card(Rank::Seven, Suit::Diamond),
            card(Rank::King, Suit::Spade),
            card(Rank::Ten, Suit::Club),
            card(Rank::Two, Suit::Heart),
            card(Rank::Three, Suit::Club),
        ],
    );

    assert_eq!(table.current_value(), 17);
    assert_eq!(table.dealer_up_card(), Some(card(Rank::Ten, Suit::Club)));
    assert_eq!(table.dealer_value(), 16);

    table.stay().unwrap();
    assert_eq!(table.game().turn(), 1);
    assert_eq!(table.state(), RoundState::PlayerTurn);
    table.stay().unwrap();
    assert_eq!(table.state(), RoundState::DealerTurn);
    assert!(table.is_dealer_turn());

    assert_eq!(table.hit().unwrap_err(), ActionError::DealerTurn);
    assert_eq!(table.stay().unwrap_err(), ActionError::DealerTurn);
    assert_eq!(table.showdown().unwrap_err(), ActionError::InvalidState);

    let drawn = table.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Rank::Two, Suit::Heart)]);
    assert_eq!(table.state(), RoundState::RoundOver);

    let result = table.showdown().unwrap();
    assert_eq!(result.dealer_value, 18);
    assert!(!result.dealer_bust);
    assert_eq!(result.players.len(), 2);
    assert_eq!(result.players[0].name, "Player 1");
    assert_eq!(result.players[0].value, 17);
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[1].seat, 1);
    assert_eq!(result.players[1].value, 19);
    assert_eq!(result.players[1].outcome, HandOutcome::Win);
}

#[test]
fn player_bust_ends_turn_and_loses_even_if_dealer_busts() {
    let mut table = rigged_table(
        2,
        &[
            card(Rank::Ten, Suit::Heart),
            card(Rank::Five, Suit::Club),
            card(Rank::Ten, Suit::Spade),
            card(Rank::Six, Suit::Diamond),
            card(Rank::Six, Suit::Spade),
            card(Rank::Six, Suit::Club),
            card(Rank::King, Suit::Diamond),
            card(Rank::Nine, Suit::Heart),
            card(Rank::Queen, Suit::Club),
        ],
    );

    let hit = table.hit().unwrap();
    assert_eq!(hit.seat, 0);
    assert_eq!(hit.card, card(Rank::King, Suit::Diamond));
    assert_eq!(hit.value, 26);
    assert!(hit.bust);
    assert!(!hit.recycled);
    assert_eq!(table.game().turn(), 1);
    assert_eq!(table.state(), RoundState::PlayerTurn);
    assert_eq!(hand_value(table.game().hand(hit.seat).unwrap()), hit.value);
    assert_eq!(table.current_value(), 11);

    let hit = table.hit().unwrap();
    assert_eq!(hit.value, 20);
    assert!(!hit.bust);
    assert_eq!(table.game().turn(), 1);

    table.stay().unwrap();
    let drawn = table.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Rank::Queen, Suit::Club)]);

    let result = table.showdown().unwrap();
    assert_eq!(result.dealer_value, 26);
    assert!(result.dealer_bust);
    assert_eq!(result.players[0].outcome, HandOutcome::Bust);
    assert_eq!(result.players[1].outcome, HandOutcome::Win);
}

#[test]
fn dealer_stands_on_soft_seventeen_without_drawing() {
    let mut table = rigged_table(
        1,
        &[
            card(Rank::Ten, Suit::Heart),
            card(Rank::Ace, Suit::Spade),
            card(Rank::Seven, Suit::Diamond),
            card(Rank::Six, Suit::Club),
        ],
    );

    table.stay().unwrap();
    assert!(table.dealer_play().unwrap().is_empty());

    let result = table.showdown().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.players[0].outcome, HandOutcome::Push);
}

#[test]
fn replace_deck_mid_round_keeps_turn_and_state() {
    let mut table = Blackjack::new(2, 5).unwrap();
    let before = table.game().deck().clone();

    let previous = table.replace_deck(Deck::from_cards(vec![card(Rank::Two, Suit::Club)]));
    assert_eq!(previous, before);
    assert_eq!(table.state(), RoundState::PlayerTurn);
    assert_eq!(table.game().turn(), 0);

    let hit = table.hit().unwrap();
    assert_eq!(hit.seat, 0);
    assert_eq!(hit.card, card(Rank::Two, Suit::Club));
    assert!(table.game().deck().is_empty());
}

#[test]
fn actions_rejected_outside_their_state() {
    let mut table = Blackjack::new(1, 4).unwrap();
    assert_eq!(table.deal().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.dealer_play().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.next_round().unwrap_err(), ActionError::InvalidState);

    table.stay().unwrap();
    table.dealer_play().unwrap();
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stay().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.dealer_play().unwrap_err(), ActionError::InvalidState);

    table.clear_round();
    assert_eq!(table.state(), RoundState::AwaitingDeal);
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidState);
    assert!(table.game().players().iter().all(|p| p.hand().is_empty()));
}

#[test]
fn next_round_resets_turn_and_keeps_every_card() {
    let mut table = Blackjack::new(3, 99).unwrap();

    for _ in 0..30 {
        while table.state() == RoundState::PlayerTurn {
            if table.current_value() < 15 {
                table.hit().unwrap();
            } else {
                table.stay().unwrap();
            }
        }
        table.dealer_play().unwrap();

        let result = table.showdown().unwrap();
        assert_eq!(result.players.len(), 3);
        assert_eq!(table.game().total_cards(), DECK_SIZE);

        table.next_round().unwrap();
        assert_eq!(table.game().turn(), 0);
        assert!(table.game().players().iter().all(|p| p.hand().len() == 2));
        assert_eq!(table.game().total_cards(), DECK_SIZE);
    }
}

#[test]
fn dealer_only_table_goes_straight_to_dealer() {
    let mut table = Blackjack::new(0, 6).unwrap();
    assert_eq!(table.state(), RoundState::DealerTurn);
    assert_eq!(table.hit().unwrap_err(), ActionError::DealerTurn);

    table.dealer_play().unwrap();
    let result = table.showdown().unwrap();
    assert!(result.players.is_empty());
    assert!(result.dealer_value > DEALER_STAND_THRESHOLD);
}

#[test]
fn shared_table_serializes_turns() {
    let shared = SharedTable::new(Blackjack::new(2, 12).unwrap());

    std::thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| shared.with(Blackjack::stay).unwrap());
        }
    });

    let table = shared.into_inner();
    assert_eq!(table.state(), RoundState::DealerTurn);
}
