//! AI-vs-AI simulation driver.
//!
//! Runs seeded, reproducible matches between two automated opponents and
//! prints a JSON summary to stdout.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use sea_battle::{init_logging, AiTargeting, FleetPlacer, GameConfig, Match, Side};

#[derive(Parser)]
#[command(author, version, about = "Run automated sea battle matches")]
struct Args {
    /// Board side length, 1..=10.
    #[arg(long, default_value_t = 6)]
    board_size: u8,

    /// Comma-separated vessel lengths, e.g. 3,2,2,1,1,1,1.
    #[arg(long, value_delimiter = ',')]
    fleet: Option<Vec<u8>>,

    /// JSON config file overriding --board-size and --fleet.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fix the RNG seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of matches to run.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

#[derive(Serialize)]
struct GameSummary {
    game: u32,
    seed: u64,
    winner: String,
    shots_a: usize,
    shots_b: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config: GameConfig = if let Some(path) = &args.config {
        serde_json::from_reader(File::open(path)?)?
    } else {
        let mut config = GameConfig::default();
        config.board_size = args.board_size;
        if let Some(fleet) = args.fleet.clone() {
            config.fleet = fleet;
        }
        config
    };
    config.validate()?;

    let base_seed = args.seed.unwrap_or_else(|| rand::rng().random());

    let mut summaries = Vec::with_capacity(args.games as usize);
    for game in 0..args.games {
        let seed = base_seed.wrapping_add(game as u64);
        let mut placer = FleetPlacer::new(SmallRng::seed_from_u64(seed));
        let a = AiTargeting::new(config.board_size, SmallRng::seed_from_u64(seed ^ 0x0a));
        let b = AiTargeting::new(config.board_size, SmallRng::seed_from_u64(seed ^ 0x0b));
        let mut game_match = Match::new(&config, Box::new(a), Box::new(b), &mut placer)?;
        let winner = game_match.run()?;
        summaries.push(GameSummary {
            game,
            seed,
            winner: winner.to_string(),
            // each side's shots land on the enemy board's ledger
            shots_a: game_match.grid(Side::B).shots().count_ones(),
            shots_b: game_match.grid(Side::A).shots().count_ones(),
        });
    }

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
