use anyhow::{Result, bail};
use clap::Parser;
use holdem_console::{Console, ConsoleConfig, EngineClient, Table, TableConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "holdem-console",
    version,
    about = "Terminal table client for a remote Texas Hold'em engine",
    author
)]
struct Cli {
    /// Engine root URL, e.g. http://localhost:8080
    #[arg(long)]
    server: String,

    /// Number of seats at the table (2-9)
    #[arg(long, default_value_t = 6)]
    players: u32,

    /// Your seat index (0-based)
    #[arg(long, default_value_t = 0)]
    seat: u32,

    /// Starting chip stack per player
    #[arg(long, default_value_t = 1000)]
    chips: u32,

    /// Small blind
    #[arg(long = "small-blind", default_value_t = 10)]
    small_blind: u32,

    /// Big blind
    #[arg(long = "big-blind", default_value_t = 20)]
    big_blind: u32,

    /// Opponent AI preset
    #[arg(long, default_value = "mixed")]
    ai: String,

    /// Number of hands to play (defaults to 1)
    #[arg(long, default_value_t = 1)]
    hands: u32,

    /// Play hands unattended, check/calling (useful for smoke tests)
    #[arg(long, default_value_t = false)]
    auto: bool,

    /// Disable ANSI colors in output
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = color_eyre::install();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if !(2..=9).contains(&cli.players) {
        bail!("player count must be between 2 and 9");
    }
    if cli.seat >= cli.players {
        bail!("seat index must be below the player count");
    }

    let config = TableConfig {
        player_count: cli.players,
        human_position: cli.seat,
        starting_chips: cli.chips,
        small_blind: cli.small_blind,
        big_blind: cli.big_blind,
        ai_type: cli.ai.clone(),
    };

    let client = EngineClient::new(&cli.server);
    let table = Table::create(client, &config).await?;
    let mut console = Console::new(
        table,
        ConsoleConfig {
            hands: cli.hands,
            no_color: cli.no_color,
        },
    );

    if cli.auto {
        console.autoplay().await
    } else {
        console.run().await
    }
}
