use holdem_console::advice::{from_snapshot, parse};
use holdem_console::state::{GameState, Stage};

fn snapshot(recommendation: Option<&str>) -> GameState {
    GameState {
        players: vec![],
        community_cards: vec![],
        stage: Stage::Preflop,
        pot: 0,
        current_bet: 0,
        active_player_index: -1,
        button_position: 0,
        is_human_turn: false,
        hand_complete: false,
        result_message: None,
        recommendation: recommendation.map(str::to_string),
        available_actions: vec![],
    }
}

#[test]
fn splits_on_the_first_colon() {
    let advice = parse("Фолд: K6o - Мусор");
    assert_eq!(advice.action, "Фолд");
    assert_eq!(advice.reasoning, "K6o - Мусор");
}

#[test]
fn no_colon_means_action_only() {
    let advice = parse("Raise");
    assert_eq!(advice.action, "Raise");
    assert_eq!(advice.reasoning, "");
}

#[test]
fn strips_embedded_position_boilerplate() {
    let advice = parse("Колл: Сильная рука. Позиция: BTN");
    assert_eq!(advice.action, "Колл");
    assert_eq!(advice.reasoning, "Сильная рука.");
}

#[test]
fn strips_repeated_recommendation_field_case_insensitively() {
    let advice = parse("Check: marginal holding. RECOMMENDATION: check again");
    assert_eq!(advice.action, "Check");
    assert_eq!(advice.reasoning, "marginal holding.");
}

#[test]
fn later_colons_stay_in_the_reasoning() {
    let advice = parse("Bet: pot odds 3:1 favor continuing");
    assert_eq!(advice.action, "Bet");
    assert_eq!(advice.reasoning, "pot odds 3:1 favor continuing");
}

#[test]
fn absent_or_blank_advisories_yield_nothing() {
    assert!(from_snapshot(&snapshot(None)).is_none());
    assert!(from_snapshot(&snapshot(Some("   "))).is_none());
}

#[test]
fn advisory_on_the_snapshot_parses_like_the_raw_string() {
    let advice = from_snapshot(&snapshot(Some("Фолд: K6o - Мусор"))).expect("advisory present");
    assert_eq!(advice.action, "Фолд");
    assert_eq!(advice.reasoning, "K6o - Мусор");
}
