use holdem_console::cards::{Card, Rank, Suit};
use holdem_console::console::seat_label;
use holdem_console::layout::{SeatCards, TableGeometry, seat_point, seat_views};
use holdem_console::state::{GameState, Player, Stage};

fn player(name: &str, chips: u32, is_human: bool) -> Player {
    Player {
        name: name.to_string(),
        chips,
        current_bet: 0,
        position: "BTN".to_string(),
        folded: false,
        all_in: false,
        is_human,
        hole_cards: None,
    }
}

fn snapshot(players: Vec<Player>) -> GameState {
    GameState {
        players,
        community_cards: vec![],
        stage: Stage::Preflop,
        pot: 0,
        current_bet: 0,
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
fn every_seat_lands_on_the_ellipse_for_all_table_sizes() {
    let geometry = TableGeometry::default();
    for seat_count in 2..=9 {
        for seat_index in 0..seat_count {
            let point = seat_point(&geometry, seat_index, seat_count);
            let nx = (point.x - geometry.center_x) / geometry.radius_x;
            let ny = (point.y - geometry.center_y) / geometry.radius_y;
            let radius = nx * nx + ny * ny;
            assert!(
                (radius - 1.0).abs() < 1e-9,
                "seat {seat_index}/{seat_count} off the ellipse: {radius}"
            );
            assert!((0.0..=1.0).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
        }
    }
}

#[test]
fn seat_zero_sits_at_the_top() {
    let geometry = TableGeometry::default();
    for seat_count in 2..=9 {
        let point = seat_point(&geometry, 0, seat_count);
        assert!((point.x - geometry.center_x).abs() < 1e-9);
        assert!((point.y - (geometry.center_y - geometry.radius_y)).abs() < 1e-9);
    }
}

#[test]
fn seats_proceed_clockwise_from_the_top() {
    let geometry = TableGeometry::default();
    // Quarter of the way around a 4-seat table is the right edge.
    let point = seat_point(&geometry, 1, 4);
    assert!((point.x - (geometry.center_x + geometry.radius_x)).abs() < 1e-9);
    assert!((point.y - geometry.center_y).abs() < 1e-9);
}

#[test]
fn button_and_active_flags_follow_the_snapshot() {
    let mut state = snapshot(vec![
        player("You", 500, true),
        player("Ada", 500, false),
        player("Bo", 500, false),
    ]);
    state.button_position = 2;
    state.active_player_index = 1;

    let views = seat_views(&state, &TableGeometry::default());
    assert!(views[2].is_button);
    assert!(!views[0].is_button);
    assert!(views[1].is_active_turn);
    assert!(!views[0].is_active_turn);
}

#[test]
fn no_seat_is_active_once_the_hand_completes() {
    let mut state = snapshot(vec![player("You", 500, true), player("Ada", 500, false)]);
    state.active_player_index = 1;
    state.hand_complete = true;

    let views = seat_views(&state, &TableGeometry::default());
    assert!(views.iter().all(|seat| !seat.is_active_turn));
}

#[test]
fn opponent_cards_render_face_down_even_when_the_payload_leaks_them() {
    let mut rival = player("Ada", 500, false);
    rival.hole_cards = Some(vec![
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Hearts),
    ]);
    let mut state = snapshot(vec![player("You", 500, true), rival]);
    state.players[0].hole_cards = Some(vec![
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ]);

    let views = seat_views(&state, &TableGeometry::default());
    assert!(matches!(views[1].cards, SeatCards::Down(2)));
    match &views[0].cards {
        SeatCards::Up(cards) => assert_eq!(cards.len(), 2),
        SeatCards::Down(_) => panic!("human hand must render face up"),
    }
}

#[test]
fn eliminated_takes_precedence_over_folded() {
    let mut state = snapshot(vec![player("You", 0, true), player("Ada", 0, false)]);
    for p in &mut state.players {
        p.folded = true;
    }
    state.hand_complete = true;
    state.active_player_index = -1;

    for seat in seat_views(&state, &TableGeometry::default()) {
        assert!(seat.is_eliminated);
        let label = seat_label(&seat);
        assert!(label.contains("OUT"), "label should show OUT: {label}");
        assert!(!label.contains("FOLD"), "label must not show FOLD: {label}");
    }
}
