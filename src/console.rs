use std::io::{self, Write};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::advice;
use crate::layout::{SeatCards, SeatView, TableGeometry, seat_views};
use crate::legality::BetBounds;
use crate::state::{ActionKind, GameState};
use crate::sync::Table;

const GRID_WIDTH: usize = 72;
const GRID_HEIGHT: usize = 15;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub hands: u32,
    pub no_color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            hands: 1,
            no_color: false,
        }
    }
}

/// One selectable entry in the action prompt.
#[derive(Debug, Clone)]
struct ActionEntry {
    kind: ActionKind,
    label: String,
    amount: u32,
    prompts_amount: bool,
}

/// Terminal shell over a [`Table`]: renders snapshots and drives the
/// human's turn. Everything here consumes the core's outputs; nothing in
/// it decides game outcomes.
pub struct Console {
    table: Table,
    config: ConsoleConfig,
    geometry: TableGeometry,
}

impl Console {
    pub fn new(table: Table, config: ConsoleConfig) -> Self {
        Self {
            table,
            config,
            geometry: TableGeometry::default(),
        }
    }

    /// Interactive loop: render, act on the human's turn, otherwise poll
    /// until the table moves. `q` at any prompt quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut state = self.table.start_hand().await?;
        let mut hands_played = 0u32;

        loop {
            self.render(&state);

            if state.hand_complete {
                hands_played += 1;
                if hands_played >= self.config.hands || !self.prompt_next_hand()? {
                    break;
                }
                state = self.table.start_hand().await?;
                continue;
            }

            if state.is_human_turn {
                match self.prompt_action(&state)? {
                    Some((kind, amount)) => match self.table.act(kind, amount).await {
                        Ok(next) => state = next,
                        Err(error) => {
                            // Fall back to the last good state; controls
                            // come back on the next loop pass.
                            tracing::warn!(%error, "action failed");
                            println!("Action failed ({error}); table unchanged.");
                        }
                    },
                    None => break,
                }
            } else {
                println!("Waiting on opponents...");
                state = self.table.wait_for_turn().await;
            }
        }

        self.print_summary(hands_played);
        self.table.close().await;
        Ok(())
    }

    /// Unattended smoke-test mode: checks when legal, calls otherwise.
    pub async fn autoplay(&mut self) -> Result<()> {
        let mut hands_played = 0u32;
        while hands_played < self.config.hands {
            let mut state = self.table.start_hand().await?;
            loop {
                if state.hand_complete {
                    hands_played += 1;
                    self.render(&state);
                    break;
                }
                if state.is_human_turn {
                    let bounds = self
                        .table
                        .bounds(&state)
                        .ok_or_else(|| anyhow::anyhow!("snapshot has no human seat"))?;
                    let kind = if bounds.can_check {
                        ActionKind::Check
                    } else {
                        ActionKind::Call
                    };
                    state = self.table.act(kind, 0).await?;
                } else {
                    state = self.table.wait_for_turn().await;
                }
            }
        }
        self.print_summary(hands_played);
        self.table.close().await;
        Ok(())
    }

    fn render(&self, state: &GameState) {
        if self.config.no_color {
            println!(
                "Stage {} | Pot {} | Bet {}",
                state.stage.label(),
                state.pot,
                state.current_bet
            );
        } else {
            println!(
                "{} {} {} {} {} {}",
                "Stage".bold().cyan(),
                state.stage.label().bold().white(),
                "Pot".bold().cyan(),
                state.pot.bold().yellow(),
                "Bet".bold().cyan(),
                state.current_bet.bold().yellow()
            );
        }

        for line in self.table_lines(state) {
            println!("{line}");
        }

        if let Some(human) = state.human() {
            let hand = match &human.hole_cards {
                Some(cards) if !cards.is_empty() => cards
                    .iter()
                    .map(|card| card.notation())
                    .collect::<Vec<_>>()
                    .join(" "),
                _ => "--".to_string(),
            };
            if self.config.no_color {
                println!("Your hand: {hand} [{}]", human.position);
            } else {
                println!(
                    "{} {} [{}]",
                    "Your hand:".bold().white(),
                    hand.bold().yellow(),
                    human.position
                );
            }
        }

        if state.hand_complete {
            let message = state
                .result_message
                .as_deref()
                .unwrap_or("Ready for the next hand");
            if self.config.no_color {
                println!("Hand complete: {message}");
            } else {
                println!("{} {message}", "Hand complete:".bold().magenta());
            }
        }
    }

    /// Character-grid table. Seats land where the geometry engine puts
    /// them; the board sits in the middle of the ellipse.
    fn table_lines(&self, state: &GameState) -> Vec<String> {
        let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];

        for seat in seat_views(state, &self.geometry) {
            let row = (seat.point.y * (GRID_HEIGHT - 1) as f64).round() as usize;
            let col = (seat.point.x * (GRID_WIDTH - 1) as f64).round() as usize;
            place_centered(&mut grid, row.min(GRID_HEIGHT - 1), col, &seat_label(&seat));
        }

        let board = if state.community_cards.is_empty() {
            "Board: --".to_string()
        } else {
            format!(
                "Board: {}",
                state
                    .community_cards
                    .iter()
                    .map(|card| card.notation())
                    .collect::<Vec<_>>()
                    .join(" ")
            )
        };
        place_centered(&mut grid, GRID_HEIGHT / 2, GRID_WIDTH / 2, &board);

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn prompt_next_hand(&self) -> Result<bool> {
        let mut input = String::new();
        print!("Next hand? [Enter to deal, q to quit]: ");
        io::stdout().flush()?;
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_lowercase() != "q")
    }

    fn prompt_action(&self, state: &GameState) -> Result<Option<(ActionKind, u32)>> {
        let bounds = self
            .table
            .bounds(state)
            .ok_or_else(|| anyhow::anyhow!("snapshot has no human seat"))?;
        let entries = action_entries(state, bounds);

        self.print_advice(state);

        let mut input = String::new();
        loop {
            for (idx, entry) in entries.iter().enumerate() {
                println!("  {}. {}", idx + 1, entry.label);
            }
            input.clear();
            print!("Select action [1-{}] (h=help, q=quit): ", entries.len());
            io::stdout().flush()?;
            io::stdin().read_line(&mut input)?;
            let trimmed = input.trim().to_lowercase();

            if trimmed == "q" {
                return Ok(None);
            }
            if trimmed == "h" {
                println!(
                    "To call: {} | Min raise: {} | All-in: {}",
                    bounds.to_call, bounds.min_raise, bounds.max_raise
                );
                continue;
            }

            match trimmed.parse::<usize>() {
                Ok(index) if (1..=entries.len()).contains(&index) => {
                    let entry = &entries[index - 1];
                    let amount = if entry.prompts_amount {
                        self.prompt_raise_amount(bounds)?
                    } else {
                        entry.amount
                    };
                    return Ok(Some((entry.kind, amount)));
                }
                _ => println!("Invalid selection. Try again or press 'h' for help."),
            }
        }
    }

    fn prompt_raise_amount(&self, bounds: BetBounds) -> Result<u32> {
        let mut input = String::new();
        loop {
            input.clear();
            print!("Raise to [{}..{}]: ", bounds.min_raise, bounds.max_raise);
            io::stdout().flush()?;
            io::stdin().read_line(&mut input)?;
            match input.trim().parse::<u32>() {
                Ok(amount) => return Ok(bounds.clamp_raise(amount)),
                Err(_) => println!("Enter a number."),
            }
        }
    }

    fn print_advice(&self, state: &GameState) {
        let Some(advice) = advice::from_snapshot(state) else {
            return;
        };
        let position = state
            .human()
            .map(|human| human.position.clone())
            .unwrap_or_else(|| "--".to_string());
        let reasoning = if advice.reasoning.is_empty() {
            "--"
        } else {
            advice.reasoning.as_str()
        };
        if self.config.no_color {
            println!("Advice: {} | {} | Position {}", advice.action, reasoning, position);
        } else {
            println!(
                "{} {} {} {} {} {}",
                "Advice".bold().green(),
                advice.action.bold().white(),
                "|".dimmed(),
                reasoning,
                "| Position".dimmed(),
                position.bold().white()
            );
        }
    }

    fn print_summary(&self, hands_played: u32) {
        if self.config.no_color {
            println!("Summary: hands={hands_played}");
        } else {
            println!("{} hands={hands_played}", "Summary".bold().magenta());
        }
    }
}

/// Single-line seat summary placed on the table grid.
pub fn seat_label(seat: &SeatView) -> String {
    let mut label = String::new();
    if seat.is_button {
        label.push_str("(D)");
    }
    if seat.is_active_turn {
        label.push('>');
    }
    label.push_str(&seat.name);
    label.push_str(&format!(" ${}", seat.chips));
    if seat.current_bet > 0 {
        label.push_str(&format!(" bet {}", seat.current_bet));
    }
    // Eliminated wins over folded even when the record carries both.
    if seat.is_eliminated {
        label.push_str(" OUT");
    } else if seat.is_folded {
        label.push_str(" FOLD");
    } else if seat.is_all_in {
        label.push_str(" ALL-IN");
    }
    match &seat.cards {
        SeatCards::Up(cards) => {
            label.push(' ');
            label.push_str(
                &cards
                    .iter()
                    .map(|card| card.notation())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        SeatCards::Down(count) => {
            if !seat.is_folded && !seat.is_eliminated {
                label.push(' ');
                label.push_str(&"▮".repeat(*count));
            }
        }
    }
    label
}

fn action_entries(state: &GameState, bounds: BetBounds) -> Vec<ActionEntry> {
    let allowed = |kind: ActionKind| {
        state.available_actions.is_empty() || state.available_actions.contains(&kind)
    };

    let mut entries = Vec::new();
    if allowed(ActionKind::Fold) {
        entries.push(ActionEntry {
            kind: ActionKind::Fold,
            label: "Fold".to_string(),
            amount: 0,
            prompts_amount: false,
        });
    }
    if bounds.can_check {
        if allowed(ActionKind::Check) {
            entries.push(ActionEntry {
                kind: ActionKind::Check,
                label: "Check".to_string(),
                amount: 0,
                prompts_amount: false,
            });
        }
    } else if allowed(ActionKind::Call) {
        entries.push(ActionEntry {
            kind: ActionKind::Call,
            label: format!("Call {}", bounds.to_call),
            amount: 0,
            prompts_amount: false,
        });
    }
    // With no bet to face the engine calls the aggressive action a bet.
    let raise_kind = if bounds.can_check && allowed(ActionKind::Bet) && !allowed(ActionKind::Raise)
    {
        ActionKind::Bet
    } else {
        ActionKind::Raise
    };
    if allowed(raise_kind) && bounds.max_raise >= bounds.min_raise {
        entries.push(ActionEntry {
            kind: raise_kind,
            label: format!("Raise to {}+", bounds.min_raise),
            amount: bounds.min_raise,
            prompts_amount: true,
        });
    }
    if allowed(ActionKind::AllIn) {
        entries.push(ActionEntry {
            kind: ActionKind::AllIn,
            label: format!("All-in {}", bounds.max_raise),
            amount: 0,
            prompts_amount: false,
        });
    }
    entries
}

fn place_centered(grid: &mut [Vec<char>], row: usize, col: usize, text: &str) {
    let chars: Vec<char> = text.chars().collect();
    let width = grid[row].len();
    let start = col.saturating_sub(chars.len() / 2);
    for (offset, ch) in chars.iter().enumerate() {
        let at = start + offset;
        if at >= width {
            break;
        }
        grid[row][at] = *ch;
    }
}
