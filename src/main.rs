mod app;
mod chart;
mod config;
mod engine;
mod input;
mod render;

use std::path::PathBuf;

use clap::Parser;

use app::App;
use config::ChartConfig;

/// Sekigae: terminal seating-chart randomizer
///
/// Lay out labeled seats on a chart, drag them around with the mouse,
/// then shuffle: a countdown, a synchronized slide into randomly
/// reassigned positions, and a completion banner.
#[derive(Parser, Debug)]
#[command(name = "sekigae")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of seats in the initial row (ignored with --roster)
    #[arg(short = 'n', long, default_value_t = 6)]
    seats: usize,

    /// JSON roster file with seat labels and optional coordinates
    #[arg(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Countdown start value
    #[arg(long, default_value_t = 3)]
    countdown_from: u32,

    /// Countdown tick interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    countdown_interval_ms: u64,

    /// Shuffle animation duration in milliseconds
    #[arg(long, default_value_t = 600)]
    shuffle_duration_ms: u64,

    /// How long the completion banner stays up, in milliseconds
    #[arg(long, default_value_t = 1500)]
    banner_ms: u64,

    /// Fixed RNG seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let config = ChartConfig {
        seats: cli.seats,
        roster: cli.roster,
        countdown_from: cli.countdown_from,
        countdown_interval_ms: cli.countdown_interval_ms,
        shuffle_duration_ms: cli.shuffle_duration_ms,
        banner_ms: cli.banner_ms,
        seed: cli.seed,
    };

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Run the app
    if let Err(e) = app.run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
