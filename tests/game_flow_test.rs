//! End-to-end game rules through the public facade.

use std::collections::HashMap;

use memory_pairs::core::GameState;
use memory_pairs::types::{Difficulty, GameAction, Phase, Symbol, FLIP_BACK_DELAY_MS, TICK_MS};

fn solve_all(game: &mut GameState) {
    for id in 0..game.deck().len() {
        if game.is_solved(id) {
            continue;
        }
        let partner = game.deck().partner_of(id).unwrap();
        assert!(game.apply_action(GameAction::Flip(id)));
        assert!(game.apply_action(GameAction::Flip(partner)));
    }
}

#[test]
fn every_difficulty_deals_two_of_each_symbol() {
    for seed in 0..25u64 {
        let mut game = GameState::new(seed);
        for difficulty in Difficulty::ALL {
            game.initialize(difficulty);
            assert_eq!(game.deck().len(), 2 * difficulty.pairs());

            let mut counts: HashMap<Symbol, usize> = HashMap::new();
            for card in game.deck().cards() {
                *counts.entry(card.symbol).or_default() += 1;
            }
            assert_eq!(counts.len(), difficulty.pairs());
            assert!(counts.values().all(|&n| n == 2));
        }
    }
}

#[test]
fn easy_game_scenario() {
    let mut game = GameState::new(2025);
    game.apply_action(GameAction::Start(Difficulty::Easy));
    assert_eq!(game.deck().len(), 10);

    let a = 0;
    let b = game.deck().partner_of(a).unwrap();
    game.apply_action(GameAction::Flip(a));
    game.apply_action(GameAction::Flip(b));

    let mut solved = game.solved().to_vec();
    solved.sort_unstable();
    let mut expected = vec![a, b];
    expected.sort_unstable();
    assert_eq!(solved, expected);
    assert_eq!(game.moves(), 1);
    assert!(!game.won());

    solve_all(&mut game);
    assert_eq!(game.solved().len(), 10);
    assert_eq!(game.moves(), 5);
    assert!(game.won());
    assert_eq!(game.phase(), Phase::Won);
}

#[test]
fn mismatch_flips_back_after_delay() {
    let mut game = GameState::new(3);
    game.initialize(Difficulty::Hard);

    let a = 0;
    let partner = game.deck().partner_of(a).unwrap();
    let b = (1..14).find(|&id| id != partner).unwrap();

    game.flip(a);
    game.flip(b);
    assert_eq!(game.flipped(), &[a, b]);
    assert_eq!(game.moves(), 1);

    // Drive the delay with frame-sized ticks like the front-end does.
    let mut waited = 0;
    while waited + TICK_MS < FLIP_BACK_DELAY_MS {
        game.tick(TICK_MS);
        waited += TICK_MS;
        assert_eq!(game.flipped().len(), 2, "cleared early at {}ms", waited);
    }
    game.tick(TICK_MS);

    assert!(game.flipped().is_empty());
    assert!(game.solved().is_empty());
    assert_eq!(game.moves(), 1);
}

#[test]
fn reset_then_initialize_starts_clean() {
    let mut game = GameState::new(10);
    for difficulty in Difficulty::ALL {
        game.initialize(difficulty);
        game.flip(0);
        game.flip(1);
        game.tick(5_000);
        solve_all(&mut game);

        game.apply_action(GameAction::Reset);
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.difficulty().is_none());

        game.apply_action(GameAction::Start(difficulty));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.elapsed_seconds(), 0);
        assert!(game.flipped().is_empty());
        assert!(game.solved().is_empty());
        assert!(game.running());
        assert!(!game.won());
    }
}

#[test]
fn pending_flip_back_never_touches_new_session() {
    let mut game = GameState::new(77);
    game.initialize(Difficulty::Medium);
    let partner = game.deck().partner_of(0).unwrap();
    let other = (1..12).find(|&id| id != partner).unwrap();
    game.flip(0);
    game.flip(other);
    game.tick(900);

    game.initialize(Difficulty::Medium);
    let session = game.session_id();
    let partner = game.deck().partner_of(4).unwrap();
    game.flip(4);
    game.tick(200);
    game.flip(partner);

    assert_eq!(game.session_id(), session);
    assert!(game.is_solved(4));
    assert_eq!(game.moves(), 1);
}

#[test]
fn won_game_ignores_further_input_and_time() {
    let mut game = GameState::new(1);
    game.initialize(Difficulty::Easy);
    game.tick(7_000);
    solve_all(&mut game);

    let snap_before = game.snapshot();
    assert!(!game.apply_action(GameAction::Flip(0)));
    assert!(!game.tick(60_000));
    assert_eq!(game.snapshot(), snap_before);
    assert_eq!(game.elapsed_seconds(), 7);
}

#[test]
fn same_seed_replays_same_deal() {
    let mut a = GameState::new(4242);
    let mut b = GameState::new(4242);
    a.initialize(Difficulty::Hard);
    b.initialize(Difficulty::Hard);
    assert_eq!(a.deck(), b.deck());
}
