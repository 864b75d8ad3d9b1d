pub mod advice;
pub mod cards;
pub mod client;
pub mod console;
pub mod layout;
pub mod legality;
pub mod state;
pub mod sync;

pub use client::{ClientError, EngineClient};
pub use console::{Console, ConsoleConfig};
pub use state::{ActionKind, GameState, Player, Stage, TableConfig};
pub use sync::Table;
