use crate::state::{GameState, Player};

/// Numeric bounds on the human's legal actions, derived from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetBounds {
    /// Chips the human must add to match the table's outstanding bet.
    pub to_call: u32,
    pub can_check: bool,
    /// Lowest legal raise-to amount.
    pub min_raise: u32,
    /// All-in ceiling.
    pub max_raise: u32,
}

impl BetBounds {
    /// Clamps a requested raise into the legal window.
    pub fn clamp_raise(&self, amount: u32) -> u32 {
        amount.clamp(self.min_raise, self.max_raise.max(self.min_raise))
    }
}

/// Pure derivation; must be re-run against every snapshot because both bet
/// levels and the human's stack move on every action.
///
/// A table bet below the human's own bet means the snapshot is
/// desynchronized; the call amount clamps to zero rather than underflowing.
pub fn bet_bounds(state: &GameState, human: &Player, big_blind: u32) -> BetBounds {
    let to_call = state.current_bet.saturating_sub(human.current_bet);
    BetBounds {
        to_call,
        can_check: to_call == 0,
        min_raise: state.current_bet + big_blind,
        max_raise: human.chips,
    }
}
