use anyhow::{Result, ensure};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_snake::app::App;
use tui_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic grid Snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value = "15")]
    height: u16,

    /// Width of one cell in terminal columns
    #[arg(long, default_value = "2")]
    cell_size: u16,

    /// Milliseconds between snake moves
    #[arg(long, default_value = "150")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tui_snake=info".into()),
        )
        .init();

    let cli = Cli::parse();
    ensure!(
        cli.width >= 4 && cli.height >= 4,
        "grid must be at least 4x4 cells"
    );
    ensure!(cli.cell_size >= 1, "cell size must be at least 1 column");
    ensure!(cli.tick_ms >= 1, "tick interval must be at least 1ms");

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        cell_size: cli.cell_size,
        tick_ms: cli.tick_ms,
    };

    let mut app = App::new(&config);
    app.run().await
}
