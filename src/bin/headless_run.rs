//! Headless Survival Runner
//!
//! Plays a session with a simple forager bot and prints the outcome. Useful
//! for tuning config files and checking determinism across seeds.

use std::path::PathBuf;

use castaway::command::Intent;
use castaway::core::config::SimulationConfig;
use castaway::core::error::Result;
use castaway::entity::inventory::ItemType;
use castaway::game::{Game, GamePhase};
use clap::Parser;
use serde::Serialize;

/// Headless Survival Runner - bot-driven sessions for tuning
#[derive(Parser, Debug)]
#[command(name = "headless_run")]
#[command(about = "Run a survival session without a renderer and report the outcome")]
struct Args {
    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds to run before stopping
    #[arg(long, default_value_t = 600)]
    seconds: u64,

    /// TOML config overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the player idle at the workbench instead of foraging
    #[arg(long)]
    idle: bool,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

#[derive(Serialize)]
struct RunResult {
    seed: u64,
    outcome: String,
    simulated_secs: f32,
    ticks: u64,
    score: u32,
    energy: f32,
    trees: usize,
    npcs: usize,
    events: usize,
    log: Vec<String>,
}

/// Energy below which the bot eats whatever food it carries
const HUNGRY_AT: f32 = 70.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("castaway=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let seed = config.seed;
    let step_ms = config.timing.tick_interval_ms;

    let mut game = Game::new(config)?;
    game.apply(Intent::Start);

    let mut events = 0;
    let end_ms = args.seconds * 1000;
    while game.phase() == GamePhase::Playing && game.world().now_ms < end_ms {
        if !args.idle {
            for intent in forage(&game) {
                events += game.apply(intent).len();
            }
        }
        events += game.step(step_ms).len();
    }

    let world = game.world();
    let outcome = match game.phase() {
        GamePhase::GameOver => "collapsed",
        _ => "survived",
    };
    let result = RunResult {
        seed,
        outcome: outcome.to_string(),
        simulated_secs: world.now_ms as f32 / 1000.0,
        ticks: world.current_tick,
        score: world.player.score,
        energy: world.player.energy,
        trees: world.trees.len(),
        npcs: world.npcs.len(),
        events,
        log: game.log().messages().map(|m| m.text.clone()).collect(),
    };

    match args.format.as_str() {
        "text" => {
            println!("Session Result");
            println!("==============");
            println!("Seed: {}", result.seed);
            println!(
                "Outcome: {} after {:.1}s ({} ticks)",
                result.outcome, result.simulated_secs, result.ticks
            );
            println!("Score: {}", result.score);
            println!("Energy: {:.1}", result.energy);
            println!("Trees: {}  NPCs: {}", result.trees, result.npcs);
            println!("Events: {}", result.events);
            for line in &result.log {
                println!("  {}", line);
            }
        }
        _ => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

/// Eat when hungry, otherwise walk to the nearest apple and pick it up
fn forage(game: &Game) -> Vec<Intent> {
    let world = game.world();
    let player = &world.player;

    if player.energy < HUNGRY_AT {
        if let Some(slot) = player.inventory.position(|item| item.is_food()) {
            return vec![Intent::Eat(slot)];
        }
    }
    if player.inventory.is_full() || player.move_target.is_some() {
        return Vec::new();
    }

    let nearest = world
        .resources
        .iter()
        .filter(|r| r.is_available() && r.item == ItemType::Apple)
        .min_by(|a, b| {
            let da = a.position.distance(&player.position);
            let db = b.position.distance(&player.position);
            da.total_cmp(&db)
        });
    match nearest {
        Some(apple)
            if apple.position.distance(&player.position)
                <= world.config.player.interaction_distance =>
        {
            vec![Intent::Collect(apple.id)]
        }
        Some(apple) => vec![Intent::MoveTo(apple.position)],
        None => Vec::new(),
    }
}
