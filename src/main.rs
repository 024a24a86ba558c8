//! Levelup - Entry Point
//!
//! Prints level data for cumulative XP values, or the level table of the
//! active curve.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use levelup::data::{load_curve, load_curve_from};
use levelup::LevelCurve;

#[derive(Parser, Debug)]
#[command(name = "levelup", version, about = "Convert cumulative XP into levels and progress")]
struct Cli {
    /// Cumulative XP values to convert
    #[arg(value_name = "XP", allow_negative_numbers = true)]
    xp: Vec<f64>,

    /// Print level data as JSON, one record per line
    #[arg(long)]
    json: bool,

    /// Print the first N levels of the curve
    #[arg(long, value_name = "N")]
    table: Option<u32>,

    /// Load the curve from this RON file instead of the default location
    #[arg(long, value_name = "PATH")]
    curve: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    )
    .init();

    let cli = Cli::parse();

    let curve = match &cli.curve {
        Some(path) => load_curve_from(path)
            .with_context(|| format!("could not use curve file {}", path.display()))?,
        None => load_curve(),
    };
    log::debug!("Using curve {:?}", curve);

    if let Some(levels) = cli.table {
        print_table(&curve, levels);
    }

    for &xp in &cli.xp {
        let data = curve.try_level_data(xp)?;
        if cli.json {
            println!("{}", serde_json::to_string(&data)?);
        } else {
            println!("{}", data);
        }
    }

    Ok(())
}

fn print_table(curve: &LevelCurve, levels: u32) {
    println!("{:>5}  {:>14}  {:>12}", "Level", "Starts at", "Increment");
    for step in curve.steps().take(levels as usize) {
        println!("{:>5}  {:>14}  {:>12}", step.level, step.start_xp, step.increment);
    }
}
