use std::f64::consts::{FRAC_PI_2, TAU};

use crate::cards::Card;
use crate::state::GameState;

/// Ellipse the seats sit on, expressed as fractions of the rendered bounds
/// so the same layout works at any resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            center_x: 0.5,
            center_y: 0.5,
            radius_x: 0.42,
            radius_y: 0.36,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatPoint {
    pub x: f64,
    pub y: f64,
}

/// Places a seat on the table ellipse. Seat 0 sits at the top and seats
/// proceed clockwise; holds for any seat count from 2 through 9.
pub fn seat_point(geometry: &TableGeometry, seat_index: usize, seat_count: usize) -> SeatPoint {
    debug_assert!(seat_count > 0 && seat_index < seat_count);
    let angle = (seat_index as f64 / seat_count as f64) * TAU - FRAC_PI_2;
    SeatPoint {
        x: geometry.center_x + geometry.radius_x * angle.cos(),
        y: geometry.center_y + geometry.radius_y * angle.sin(),
    }
}

/// What a seat shows for hole cards. Opponents are always face-down: the
/// client masks any non-human hand even if the payload carries one, rather
/// than assuming the server withheld it.
#[derive(Debug, Clone, PartialEq)]
pub enum SeatCards {
    Up(Vec<Card>),
    Down(usize),
}

/// One seat's render model: position on the ellipse plus role flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatView {
    pub index: usize,
    pub point: SeatPoint,
    pub name: String,
    pub position_label: String,
    pub chips: u32,
    pub current_bet: u32,
    pub is_button: bool,
    pub is_active_turn: bool,
    pub is_eliminated: bool,
    pub is_folded: bool,
    pub is_all_in: bool,
    pub cards: SeatCards,
}

/// Derives the full seat render model from a snapshot, in seat order.
pub fn seat_views(state: &GameState, geometry: &TableGeometry) -> Vec<SeatView> {
    let count = state.players.len();
    state
        .players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let cards = if player.is_human {
                match &player.hole_cards {
                    Some(cards) if !cards.is_empty() => SeatCards::Up(cards.clone()),
                    _ => SeatCards::Down(2),
                }
            } else {
                let held = player.hole_cards.as_ref().map_or(2, |cards| cards.len().max(2));
                SeatCards::Down(held)
            };

            SeatView {
                index,
                point: seat_point(geometry, index, count),
                name: player.name.clone(),
                position_label: player.position.clone(),
                chips: player.chips,
                current_bet: player.current_bet,
                is_button: index == state.button_position,
                is_active_turn: state.active_player_index == index as i32 && !state.hand_complete,
                is_eliminated: player.is_eliminated(),
                is_folded: player.folded,
                is_all_in: player.all_in,
                cards,
            }
        })
        .collect()
}
