mod config_cmd;
mod generate;
mod play;
mod show;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{error_chain_fmt, DatasetError};
use crate::models::schedule::{challenge_for_day, today_in_offset};
use crate::models::{config, Dataset};
use crate::store::{DatasetStore, FileSource, RefreshPolicy};

#[derive(Parser)]
#[command(name = "trezzle")]
#[command(about = "Daily treasure hunt city puzzles", long_about = None)]
pub struct Cli {
    /// Dataset snapshot (JSON) to generate from, overriding the config file
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a challenge's clues (today's by default)
    Show { number: Option<u64> },
    /// Print a challenge record as JSON
    Generate {
        number: Option<u64>,
        /// Date to stamp on the record instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Generate an unscheduled challenge from the clock
    Random,
    /// Play a challenge with a sequence of guesses
    Play {
        #[arg(long)]
        number: Option<u64>,
        #[arg(required = true)]
        guesses: Vec<String>,
    },
    /// Show configuration and today's challenge number
    Info,
    /// Update the configuration file
    Config {
        #[arg(long)]
        dataset_path: Option<PathBuf>,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
    },
}

pub fn run(cli: Cli) {
    let dataset = cli.dataset;
    match cli.command {
        None => show::show_challenge(None, dataset),
        Some(Commands::Show { number }) => show::show_challenge(number, dataset),
        Some(Commands::Generate { number, date }) => {
            generate::generate_challenge(number, date, dataset)
        }
        Some(Commands::Random) => generate::random_challenge(dataset),
        Some(Commands::Play { number, guesses }) => play::play_challenge(number, &guesses, dataset),
        Some(Commands::Info) => config_cmd::show_info(),
        Some(Commands::Config {
            dataset_path,
            start_date,
            utc_offset,
        }) => config_cmd::update_config(dataset_path, start_date, utc_offset),
    }
}

/// The requested challenge number (today's when none is given) and the
/// date to stamp on it, both taken from the configured UTC offset.
fn resolve_challenge(number: Option<u64>) -> (u64, NaiveDate) {
    let user_config = config::load_config();
    let today = today_in_offset(user_config.utc_offset_hours);
    challenge_for_day(number, today, user_config.start_date).unwrap_or_else(|| {
        eprintln!(
            "The first challenge is on {}. Come back then!",
            user_config.start_date
        );
        std::process::exit(1);
    })
}

/// Today's date at the configured UTC offset.
fn local_today() -> NaiveDate {
    today_in_offset(config::load_config().utc_offset_hours)
}

fn load_dataset(dataset_override: Option<PathBuf>) -> Arc<Dataset> {
    let user_config = config::load_config();

    // One snapshot per process; refresh policies matter to long-lived callers.
    let result = dataset_override
        .or(user_config.dataset_path)
        .ok_or_else(|| DatasetError::MissingPath(config::get_config_path()))
        .and_then(|path| DatasetStore::new(FileSource::new(path), RefreshPolicy::Never).snapshot());

    match result {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Failed to load dataset: {}", error_chain_fmt(&e));
            std::process::exit(1);
        }
    }
}
