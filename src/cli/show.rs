use std::path::PathBuf;

use crate::display::display_challenge;
use crate::generator::generate;

use super::{load_dataset, resolve_challenge};

pub fn show_challenge(number: Option<u64>, dataset_path: Option<PathBuf>) {
    let (number, date) = resolve_challenge(number);
    let dataset = load_dataset(dataset_path);

    match generate(number, &dataset, date) {
        Ok(challenge) => display_challenge(&challenge),
        Err(e) => {
            eprintln!("No valid challenge could be generated: {}", e);
            std::process::exit(1);
        }
    }
}
