//! Headless duel: sign in, pull a deck, and auto-play one match.
//!
//! The player always plays the front of their hand. Set `RUST_LOG=debug` to
//! watch the engine's transitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gacha_duel::{Arena, ArenaConfig, LogKind, MatchPhase, Side, Turn, DECK_SIZE};

/// Pull a deck from the gacha and duel the scripted opponent.
#[derive(Parser, Debug)]
#[command(name = "duel")]
#[command(about = "Gacha pulls and a dice card duel", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for pulls, shuffles and dice. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON arena config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Nickname to sign in with.
    #[arg(long, default_value = "player")]
    name: String,

    /// Print the final match snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<ArenaConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ArenaConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut arena = Arena::new(&config)?;

    arena.sign_in(&cli.name)?;
    for _ in 0..DECK_SIZE {
        let card = arena.pull()?;
        println!("Pulled {}", card.definition);
        arena.add_card_to_deck(card.id)?;
    }

    arena.find_match()?;
    arena.settle();
    arena.roll_for_turn()?;

    loop {
        match arena.phase() {
            MatchPhase::Matched(Turn::Player) => {
                let Some(card) = arena.battle().hand(Side::Player).first().map(|c| c.id) else {
                    println!("No cards left to play; stopping.");
                    break;
                };
                arena.play_card(card)?;
                arena.settle();
            }
            MatchPhase::Matched(_) => {
                if arena.settle() == 0 {
                    break;
                }
            }
            _ => break,
        }
    }

    println!();
    for entry in arena.battle().log().iter().rev() {
        let tag = match entry.kind {
            LogKind::System => "*",
            LogKind::Player => ">",
            LogKind::Opponent => "<",
        };
        println!("{tag} {}", entry.message);
    }
    println!(
        "\nHP: you {} / opponent {}",
        arena.battle().hp(Side::Player),
        arena.battle().hp(Side::Opponent)
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&arena.snapshot())?);
    }
    Ok(())
}
