//! CLI frontend for Würfelwerk dice experiments.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wk",
    about = "Würfelwerk — Monte Carlo experiments with weighted dice",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a single weighted die and print the outcomes
    Roll {
        /// Comma-separated face list, e.g. "1,2,3,4,5,6" or "H,T"
        #[arg(short, long)]
        faces: String,

        /// Number of rolls
        #[arg(short, long, default_value = "1")]
        times: usize,

        /// Weight override (repeatable), e.g. "H=3.5"
        #[arg(short, long = "weight", value_name = "FACE=WEIGHT")]
        weights: Vec<String>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play several same-faced dice together and show the result table
    Play {
        /// Comma-separated face list shared by all dice
        #[arg(short, long)]
        faces: String,

        /// Number of dice
        #[arg(short, long, default_value = "2")]
        dice: usize,

        /// Number of rolls
        #[arg(short, long, default_value = "10")]
        rolls: usize,

        /// Per-die weight override (repeatable), e.g. "0:6=3.5"
        #[arg(short, long = "weight", value_name = "DIE:FACE=WEIGHT")]
        weights: Vec<String>,

        /// Result layout: wide or narrow
        #[arg(short, long, default_value = "wide")]
        layout: String,

        /// RNG seed for reproducible plays
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Play, then print descriptive statistics over the results
    Analyze {
        /// Comma-separated face list shared by all dice
        #[arg(short, long)]
        faces: String,

        /// Number of dice
        #[arg(short, long, default_value = "2")]
        dice: usize,

        /// Number of rolls
        #[arg(short, long, default_value = "100")]
        rolls: usize,

        /// Per-die weight override (repeatable), e.g. "0:6=3.5"
        #[arg(short, long = "weight", value_name = "DIE:FACE=WEIGHT")]
        weights: Vec<String>,

        /// RNG seed for reproducible plays
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit JSON instead of tables
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            faces,
            times,
            weights,
            seed,
        } => commands::roll::run(&faces, times, &weights, seed),
        Commands::Play {
            faces,
            dice,
            rolls,
            weights,
            layout,
            seed,
            json,
        } => commands::play::run(&faces, dice, rolls, &weights, &layout, seed, json),
        Commands::Analyze {
            faces,
            dice,
            rolls,
            weights,
            seed,
            json,
        } => commands::analyze::run(&faces, dice, rolls, &weights, seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
