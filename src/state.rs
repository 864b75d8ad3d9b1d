use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Betting street as reported by the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Preflop => "Preflop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    /// Whether the action carries a chip amount on the wire. Fold, check,
    /// call and all-in default to 0; the server resolves their stake.
    pub fn carries_amount(self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Raise)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub chips: u32,
    pub current_bet: u32,
    pub position: String,
    pub folded: bool,
    pub all_in: bool,
    pub is_human: bool,
    pub hole_cards: Option<Vec<Card>>,
}

impl Player {
    /// Derived, never stored: a player with no chips is out of the game.
    pub fn is_eliminated(&self) -> bool {
        self.chips == 0
    }
}

/// A point-in-time snapshot of the table, never a delta. The server is the
/// sole source of truth; the client only reconciles against the latest one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub players: Vec<Player>,
    pub community_cards: Vec<Card>,
    pub stage: Stage,
    pub pot: u32,
    pub current_bet: u32,
    /// Index into `players`, or -1 between hands.
    pub active_player_index: i32,
    pub button_position: usize,
    pub is_human_turn: bool,
    pub hand_complete: bool,
    pub result_message: Option<String>,
    pub recommendation: Option<String>,
    #[serde(default)]
    pub available_actions: Vec<ActionKind>,
}

impl GameState {
    pub fn human(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_human)
    }

    pub fn active_player(&self) -> Option<&Player> {
        if self.hand_complete {
            return None;
        }
        usize::try_from(self.active_player_index)
            .ok()
            .and_then(|idx| self.players.get(idx))
    }
}

/// Body of the session-creation request. Defaults mirror the engine's
/// standard setup: 6-max, human in seat 0, 1000 chips, blinds 10/20.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub player_count: u32,
    pub human_position: u32,
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub ai_type: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_count: 6,
            human_position: 0,
            starting_chips: 1000,
            small_blind: 10,
            big_blind: 20,
            ai_type: "mixed".to_string(),
        }
    }
}
