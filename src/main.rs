//! Command-line driver for the rules core
//!
//! `xfchess-rules perft --depth 3` counts leaf positions of the standard
//! game by playing every legal movement on sandbox clones. `--json` dumps the
//! starting snapshot instead.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use xfchess_rules::core::{load_settings, VariantSettings};
use xfchess_rules::game::{Controller, ControllerConfig};

#[derive(Parser, Debug)]
#[command(name = "xfchess-rules", version, about = "Chess variant rules core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf positions reachable in `depth` plies
    Perft {
        #[arg(long, default_value = "3")]
        depth: u32,

        /// Board rows (overrides the settings file)
        #[arg(long)]
        rows: Option<usize>,

        /// Board columns (overrides the settings file)
        #[arg(long)]
        columns: Option<usize>,

        /// Allow moves that leave the own king attacked
        #[arg(long)]
        base: bool,

        /// Print the starting snapshot as JSON and exit
        #[arg(long)]
        json: bool,

        /// Variant settings file (JSON)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Perft {
            depth,
            rows,
            columns,
            base,
            json,
            settings,
        } => {
            let mut variant = match settings {
                Some(path) => load_settings(&path),
                None => VariantSettings::default(),
            };
            variant.rows = rows.unwrap_or(variant.rows);
            variant.columns = columns.unwrap_or(variant.columns);
            if base {
                variant.check_safety = false;
            }
            run_perft(variant.into_config(), depth, json)
        }
    }
}

fn run_perft(config: ControllerConfig, depth: u32, json: bool) -> Result<()> {
    let mut controller = Controller::new(config).context("invalid board configuration")?;
    controller.new_game().context("failed to set up the starting position")?;

    if json {
        let snapshot = serde_json::to_string_pretty(controller.board())?;
        println!("{}", snapshot);
        return Ok(());
    }

    print!("{}", controller.board());
    let start = Instant::now();
    let nodes = controller.perft(depth)?;
    println!("perft({}) = {} ({:.2?})", depth, nodes, start.elapsed());
    Ok(())
}
