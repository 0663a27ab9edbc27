use std::path::PathBuf;

use chrono::NaiveDate;

use crate::generator::generate;
use crate::models::schedule::random_challenge_number;

use super::{load_dataset, local_today, resolve_challenge};

pub fn generate_challenge(number: Option<u64>, date: Option<NaiveDate>, dataset_path: Option<PathBuf>) {
    let (number, today) = resolve_challenge(number);
    print_challenge(number, date.unwrap_or(today), dataset_path);
}

pub fn random_challenge(dataset_path: Option<PathBuf>) {
    print_challenge(random_challenge_number(), local_today(), dataset_path);
}

fn print_challenge(number: u64, date: NaiveDate, dataset_path: Option<PathBuf>) {
    let dataset = load_dataset(dataset_path);

    let challenge = match generate(number, &dataset, date) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to generate challenge {}: {}", number, e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&challenge) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize challenge: {}", e);
            std::process::exit(1);
        }
    }
}
