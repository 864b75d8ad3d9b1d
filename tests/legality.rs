use holdem_console::legality::bet_bounds;
use holdem_console::state::{GameState, Player, Stage};

fn human(chips: u32, current_bet: u32) -> Player {
    Player {
        name: "You".to_string(),
        chips,
        current_bet,
        position: "MP".to_string(),
        folded: false,
        all_in: false,
        is_human: true,
        hole_cards: None,
    }
}

fn snapshot(current_bet: u32, players: Vec<Player>) -> GameState {
    GameState {
        players,
        community_cards: vec![],
        stage: Stage::Flop,
        pot: 100,
        current_bet,
        active_player_index: 0,
        button_position: 0,
        is_human_turn: true,
        hand_complete: false,
        result_message: None,
        recommendation: None,
        available_actions: vec![],
    }
}

#[test]
fn six_max_facing_a_raise() {
    let hero = human(500, 20);
    let state = snapshot(40, vec![hero.clone()]);
    let bounds = bet_bounds(&state, &hero, 20);

    assert_eq!(bounds.to_call, 20);
    assert!(!bounds.can_check);
    assert_eq!(bounds.min_raise, 60);
    assert_eq!(bounds.max_raise, 500);
}

#[test]
fn check_is_legal_exactly_when_nothing_is_owed() {
    let hero = human(500, 40);
    let state = snapshot(40, vec![hero.clone()]);
    let bounds = bet_bounds(&state, &hero, 20);

    assert_eq!(bounds.to_call, 0);
    assert!(bounds.can_check);
}

#[test]
fn desynchronized_snapshot_clamps_to_zero() {
    // Human bet above the table level means the snapshot is stale; treat
    // the difference as zero rather than underflowing.
    let hero = human(500, 60);
    let state = snapshot(40, vec![hero.clone()]);
    let bounds = bet_bounds(&state, &hero, 20);

    assert_eq!(bounds.to_call, 0);
    assert!(bounds.can_check);
}

#[test]
fn min_raise_tracks_the_configured_big_blind() {
    let hero = human(500, 0);
    let state = snapshot(100, vec![hero.clone()]);

    assert_eq!(bet_bounds(&state, &hero, 20).min_raise, 120);
    assert_eq!(bet_bounds(&state, &hero, 50).min_raise, 150);
}

#[test]
fn raise_amounts_clamp_into_the_legal_window() {
    let hero = human(500, 20);
    let state = snapshot(40, vec![hero.clone()]);
    let bounds = bet_bounds(&state, &hero, 20);

    assert_eq!(bounds.clamp_raise(10), 60);
    assert_eq!(bounds.clamp_raise(200), 200);
    assert_eq!(bounds.clamp_raise(9999), 500);
}

#[test]
fn short_stack_caps_the_raise_ceiling() {
    let hero = human(30, 20);
    let state = snapshot(40, vec![hero.clone()]);
    let bounds = bet_bounds(&state, &hero, 20);

    assert_eq!(bounds.max_raise, 30);
    // Window is inverted (stack below the minimum raise); clamping
    // collapses onto the min-raise side from either direction. The prompt
    // never offers a raise entry for such a window.
    assert_eq!(bounds.clamp_raise(25), 60);
    assert_eq!(bounds.clamp_raise(100), 60);
}
