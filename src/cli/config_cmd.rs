use std::path::PathBuf;

use chrono::NaiveDate;

use crate::models::config;
use crate::models::schedule::{challenge_number_for, today_in_offset};

pub fn show_info() {
    let user_config = config::load_config();
    let today = today_in_offset(user_config.utc_offset_hours);

    println!("Config file: {}", config::get_config_path().display());
    match &user_config.dataset_path {
        Some(path) => println!("Dataset: {}", path.display()),
        None => println!("Dataset: (not set, pass --dataset)"),
    }
    println!("First challenge: {}", user_config.start_date);
    println!("UTC offset: {:+}h", user_config.utc_offset_hours);
    println!();

    match challenge_number_for(today, user_config.start_date) {
        Some(number) => println!("Today ({}) is challenge No. {}", today, number),
        None => println!("No challenge yet today ({})", today),
    }
}

pub fn update_config(
    dataset_path: Option<PathBuf>,
    start_date: Option<NaiveDate>,
    utc_offset: Option<i32>,
) {
    let mut user_config = config::load_config();
    let old = user_config.clone();

    if let Some(path) = dataset_path {
        user_config.dataset_path = Some(path);
    }
    if let Some(date) = start_date {
        user_config.start_date = date;
    }
    if let Some(offset) = utc_offset {
        user_config.utc_offset_hours = offset;
    }

    if user_config == old {
        println!("Nothing to change.");
        return;
    }

    if let Err(e) = config::save_config(&user_config) {
        eprintln!("Failed to save config: {}", e);
        std::process::exit(1);
    }

    println!("Saved {}", config::get_config_path().display());
}
