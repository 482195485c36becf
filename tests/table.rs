//! Round state machine integration tests, played on stacked shoes.

use bjsim::{
    BetError, Card, CountingSystem, Decision, Hand, HandOutcome, Mug, Player, RoundError,
    RoundPhase, RoundingMode, Shoe, ShoeError, Sticker, Strategy, StrategyError, Suit, Table,
    TableOptions, TableView,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Splits every pair it is offered, then stands.
struct SplitThenStand;

impl Strategy for SplitThenStand {
    fn name(&self) -> &str {
        "SplitThenStand"
    }

    fn bet(&self, _view: &TableView<'_>) -> Result<usize, StrategyError> {
        Ok(80)
    }

    fn wants_to_split(&self, _: &Hand, _: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(true)
    }

    fn wants_to_double_down(&self, _: &Hand, _: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(false)
    }

    fn wants_to_hit(&self, _: &Hand, _: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(false)
    }
}

/// Bets and nothing else.
struct BetOnly;

impl Strategy for BetOnly {
    fn name(&self) -> &str {
        "BetOnly"
    }

    fn bet(&self, _view: &TableView<'_>) -> Result<usize, StrategyError> {
        Ok(50)
    }
}

/// Implements nothing at all.
struct Lazy;

impl Strategy for Lazy {
    fn name(&self) -> &str {
        "Lazy"
    }
}

fn table_with(cards: &[Card]) -> Table {
    table_with_options(TableOptions::default(), cards)
}

fn table_with_options(options: TableOptions, cards: &[Card]) -> Table {
    let mut table = Table::new(options, 0).unwrap();
    table.set_shoe(Shoe::from_cards(cards.iter().copied()));
    table
}

/// Player blackjack against a dealer 19.
fn blackjack_shoe() -> [Card; 4] {
    [
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 13),
        card(Suit::Spades, 9),
    ]
}

#[test]
fn sticker_stands_on_19() {
    // Deal order: seat 0, dealer up-card, seat 0, dealer hole card.
    let mut table = table_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 10),
        card(Suit::Spades, 2),
    ]);
    let mut players = vec![Player::new(Sticker::default(), 1000)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    let hands = table.seats()[0].hands();
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].len(), 2);
    assert_eq!(hands[0].total(), 19);
    assert!(hands[0].is_stuck());
    assert_eq!(table.broadcast().dealer_upcard(), 7);

    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 160);
    assert_eq!(players[0].bank(), 1080);
    assert_eq!(players[0].bank_history(), &[1000, 1080]);
    assert_eq!(table.phase(), RoundPhase::Settled);
    assert_eq!(table.shoe().cards_remaining(), 1);
}

#[test]
fn split_aces_play_as_two_hands() {
    let mut table = table_with(&[
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
        card(Suit::Diamonds, 1),
        card(Suit::Spades, 7),
        // Replacement card for the first hand.
        card(Suit::Hearts, 9),
        // Second card for the split hand.
        card(Suit::Diamonds, 8),
        // Dealer draws from 16.
        card(Suit::Clubs, 2),
    ]);
    let mut players = vec![Player::new(SplitThenStand, 1000)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    let hands = table.seats()[0].hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(
        hands[0].cards(),
        &[card(Suit::Hearts, 1), card(Suit::Hearts, 9)]
    );
    assert_eq!(
        hands[1].cards(),
        &[card(Suit::Diamonds, 1), card(Suit::Diamonds, 8)]
    );
    assert!(hands.iter().all(|hand| hand.bet() == 80));

    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);

    let settlement = result.settlement(0).unwrap();
    assert_eq!(settlement.wagered, 160);
    assert_eq!(settlement.payout, 320);
    assert_eq!(players[0].bank(), 1160);
}

#[test]
fn split_needs_a_bank_covering_the_second_bet() {
    let mut table = table_with(&[
        card(Suit::Hearts, 8),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 8),
        card(Suit::Spades, 9),
    ]);
    let mut players = vec![Player::new(SplitThenStand, 100)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    assert_eq!(table.seats()[0].hands().len(), 1);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(players[0].bank(), 20);
}

#[test]
fn mug_doubles_and_takes_one_card() {
    let mut table = table_with(&[
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 8),
        card(Suit::Spades, 10),
    ]);
    let mut players = vec![Player::new(Mug::new(100), 1000)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    let hand = &table.seats()[0].hands()[0];
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.total(), 21);
    assert_eq!(hand.bet(), 200);
    assert!(!hand.is_blackjack());

    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 400);
    assert_eq!(players[0].bank(), 1200);
}

#[test]
fn dealer_hits_soft_17_and_push_returns_the_stake() {
    let mut table = table_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 3),
    ]);
    let mut players = vec![Player::new(Sticker::default(), 1000)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    assert_eq!(table.dealer().hand().len(), 3);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.hands[0].payout, 80);
    assert_eq!(result.hands[0].net(), 0);
    assert_eq!(result.settlement(0).unwrap().net(), 0);
    assert_eq!(players[0].bank(), 1000);
}

#[test]
fn blackjack_pays_three_to_two() {
    let mut table = table_with(&[
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 13),
        card(Suit::Spades, 9),
    ]);
    let mut players = vec![Player::new(Sticker::new(15), 1000)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    // 15 * 1.5 = 22.5, rounded down.
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 37);
    assert_eq!(players[0].bank(), 1022);
}

#[test]
fn bust_loses_even_when_the_dealer_busts() {
    let mut table = table_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 6),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 8),
    ]);
    let mut players = vec![Player::new(Mug::new(100), 1000)];
    table.sit(0, 0).unwrap();

    // Mug doubles 16 and busts with the 9; the dealer busts on the 8.
    let result = table.next_round(&mut players).unwrap();

    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(players[0].bank(), 800);
}

#[test]
fn refused_bets_sit_the_round_out() {
    let options = TableOptions::default().with_max_bet(Some(50));
    let mut table = Table::new(options, 3).unwrap();
    let mut players = vec![
        Player::new(Sticker::new(0), 1000),
        Player::new(Sticker::new(500), 100),
        Player::new(Sticker::new(80), 1000),
    ];
    table.sit(0, 0).unwrap();
    table.sit(1, 1).unwrap();
    table.sit(2, 2).unwrap();

    let result = table.next_round(&mut players).unwrap();

    assert!(result.hands.is_empty());
    let reasons: Vec<BetError> = result.rejected_bets.iter().map(|r| r.reason).collect();
    assert_eq!(
        reasons,
        vec![
            BetError::ZeroBet,
            BetError::InsufficientFunds {
                bet: 500,
                available: 100
            },
            BetError::AboveMaximum { bet: 80, max: 50 },
        ]
    );
    assert!(table.seats().iter().all(|seat| seat.hands().is_empty()));
    assert_eq!(players[0].bank(), 1000);
    assert_eq!(players[1].bank(), 100);
    assert_eq!(players[2].bank(), 1000);
}

#[test]
fn one_player_at_two_seats_bets_from_one_bank() {
    let mut table = Table::new(TableOptions::default(), 5).unwrap();
    let mut players = vec![Player::new(Sticker::new(60), 100)];
    table.sit(0, 0).unwrap();
    table.sit(0, 1).unwrap();
    assert_eq!(table.seated_players(), vec![0]);

    let result = table.next_round(&mut players).unwrap();

    assert_eq!(result.hands.len(), 1);
    assert_eq!(result.rejected_bets.len(), 1);
    assert_eq!(result.rejected_bets[0].seat, 1);
    assert_eq!(result.players.len(), 1);
    assert_eq!(players[0].bank_history().len(), 2);
}

#[test]
fn money_is_conserved_over_many_rounds() {
    let mut table = Table::new(TableOptions::default().with_decks(3).with_penetration(80), 11)
        .unwrap();
    let mut players = vec![
        Player::new(Mug::default(), 5_000),
        Player::new(Sticker::default(), 5_000),
        Player::new(bjsim::BasicStrategist::default(), 5_000),
        Player::new(bjsim::Risker::default(), 5_000),
    ];
    for seat in 0..4 {
        table.sit(seat, seat).unwrap();
    }

    for _ in 0..200 {
        if table.shoe().cut_card_reached() {
            table.new_shoe().unwrap();
        }
        let before: usize = players.iter().map(Player::bank).sum();
        let result = table.next_round(&mut players).unwrap();
        let after: usize = players.iter().map(Player::bank).sum();

        let wagered: usize = result.players.iter().map(|p| p.wagered).sum();
        let payout: usize = result.players.iter().map(|p| p.payout).sum();
        assert_eq!(after + wagered, before + payout);

        for settlement in &result.players {
            let hands_net: isize = result.hands_for(settlement.player_id).map(|h| h.net()).sum();
            assert_eq!(settlement.net(), hands_net);
            assert!(settlement.wagered <= settlement.bank_before);
        }
        assert!(players.iter().all(|p| p.round_betting() == 0 && p.payout() == 0));
    }
}

#[test]
fn unimplemented_decision_aborts_the_round() {
    let mut table = table_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 10),
    ]);
    let mut players = vec![Player::new(BetOnly, 1000)];
    table.sit(0, 0).unwrap();

    let err = table.next_round(&mut players).unwrap_err();

    assert_eq!(
        err,
        RoundError::Strategy(StrategyError::Unimplemented {
            strategy: "BetOnly".to_owned(),
            decision: Decision::DoubleDown,
        })
    );
    assert_eq!(table.phase(), RoundPhase::Aborted);
    assert_eq!(players[0].round_betting(), 0);
    assert_eq!(players[0].bank(), 1000);
    assert_eq!(players[0].bank_history(), &[1000]);
}

#[test]
fn strategy_without_bet_fails_at_betting() {
    let mut table = Table::new(TableOptions::default(), 1).unwrap();
    let mut players = vec![Player::new(Lazy, 1000)];
    table.sit(0, 3).unwrap();

    let err = table.next_round(&mut players).unwrap_err();
    assert!(matches!(
        err,
        RoundError::Strategy(StrategyError::Unimplemented {
            decision: Decision::Bet,
            ..
        })
    ));
}

#[test]
fn running_out_of_cards_voids_the_round() {
    let mut table = table_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 9),
    ]);
    let mut players = vec![Player::new(Sticker::default(), 1000)];
    table.sit(0, 0).unwrap();

    let err = table.next_round(&mut players).unwrap_err();

    assert_eq!(err, RoundError::Shoe(ShoeError::Exhausted));
    assert_eq!(table.phase(), RoundPhase::Aborted);
    assert_eq!(players[0].round_betting(), 0);
    assert_eq!(players[0].bank(), 1000);
}

#[test]
fn seat_index_is_checked() {
    let mut table = Table::new(TableOptions::default().with_seats(2), 1).unwrap();
    assert!(table.sit(0, 2).is_err());
    assert_eq!(table.sit(0, 1), Ok(None));
    assert_eq!(table.sit(4, 1), Ok(Some(0)));
    assert_eq!(table.vacate(1), Ok(Some(4)));
}

#[test]
fn unknown_player_is_reported() {
    let mut table = Table::new(TableOptions::default(), 1).unwrap();
    table.sit(3, 0).unwrap();
    let mut players = vec![Player::new(Sticker::default(), 1000)];
    assert_eq!(
        table.next_round(&mut players).unwrap_err(),
        RoundError::UnknownPlayer(3)
    );
}

#[test]
fn round_continues_past_the_cut_card() {
    let cards = [
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 10),
        card(Suit::Spades, 2),
    ];
    let mut table = Table::new(TableOptions::default(), 0).unwrap();
    let mut shoe = Shoe::from_cards(cards);
    shoe.penetrate(1).unwrap();
    table.set_shoe(shoe);
    let mut players = vec![Player::new(Sticker::default(), 1000)];
    table.sit(0, 0).unwrap();

    // The 10s moves behind the cut card, so the dealer's 11 draws it.
    let result = table.next_round(&mut players).unwrap();
    assert!(table.shoe().cut_card_reached());
    assert!(table.shoe().is_empty());
    assert_eq!(result.dealer_value, 21);
    assert_eq!(table.phase(), RoundPhase::Settled);
}

#[test]
fn table_display_lists_dealer_and_hands() {
    let mut table = table_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 10),
    ]);
    let mut players = vec![Player::new(Sticker::default(), 1000)];
    table.sit(0, 0).unwrap();
    table.next_round(&mut players).unwrap();

    let rendered = table.to_string();
    assert!(rendered.starts_with("Dealer   :   17 [7c 10s]\n"));
    assert!(rendered.contains("Seat 0.0 :   19 [10h 9d]\n"));
}

#[test]
fn blackjack_payout_rounds_up() {
    let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    let mut table = table_with_options(options, &blackjack_shoe());
    let mut players = vec![Player::new(Sticker::new(15), 1000)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    // 15 * 1.5 = 22.5, rounded up.
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 38);
    assert_eq!(players[0].bank(), 1023);
}

#[test]
fn six_to_five_blackjack_rounds_to_nearest() {
    let options = TableOptions::default()
        .with_blackjack_pays(1.2)
        .with_rounding_blackjack(RoundingMode::Nearest);
    let mut table = table_with_options(options, &blackjack_shoe());
    let mut players = vec![Player::new(Sticker::new(13), 1000)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    // 13 * 1.2 = 15.6, rounded to 16.
    assert_eq!(result.hands[0].payout, 29);
    assert_eq!(players[0].bank(), 1016);
}

#[test]
fn bet_below_the_minimum_is_refused() {
    let options = TableOptions::default().with_min_bet(10);
    let mut table = Table::new(options, 8).unwrap();
    let mut players = vec![Player::new(Sticker::new(5), 1000)];
    table.sit(0, 0).unwrap();
    assert!(table.seats()[0].is_occupied());

    let result = table.next_round(&mut players).unwrap();

    assert!(result.hands.is_empty());
    assert_eq!(result.rejected_bets.len(), 1);
    assert_eq!(
        result.rejected_bets[0].reason,
        BetError::BelowMinimum { bet: 5, min: 10 }
    );
    assert_eq!(players[0].bank(), 1000);
}

#[test]
fn broadcast_counts_with_the_configured_system() {
    let options = TableOptions::default().with_counting(CountingSystem::Zen);
    let mut table = table_with_options(
        options,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 10),
        ],
    );
    let mut players = vec![Player::new(Sticker::default(), 1000)];
    table.sit(0, 0).unwrap();

    table.next_round(&mut players).unwrap();

    // Zen: tens -2 each, seven +1, nine 0. Hi-Lo would give -1.
    assert_eq!(table.broadcast().system(), CountingSystem::Zen);
    assert_eq!(table.broadcast().running_count(), -3);
    assert_eq!(table.broadcast().cards_seen(), 4);
}

#[test]
fn double_down_needs_the_bet_available() {
    let mut table = table_with(&[
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 8),
        card(Suit::Spades, 10),
    ]);
    let mut players = vec![Player::new(Mug::new(100), 150)];
    table.sit(0, 0).unwrap();

    let result = table.next_round(&mut players).unwrap();

    // Only 50 left after the bet, so the mug hits instead of doubling.
    let hand = &table.seats()[0].hands()[0];
    assert_eq!(hand.bet(), 100);
    assert_eq!(hand.total(), 21);
    assert_eq!(result.settlement(0).unwrap().wagered, 100);
    assert_eq!(result.hands[0].payout, 200);
    assert_eq!(players[0].bank(), 250);
}
