use std::path::PathBuf;

use crate::display::{display_outcome, display_share};
use crate::game::Game;
use crate::generator::generate_with_location;

use super::{load_dataset, resolve_challenge};

pub fn play_challenge(number: Option<u64>, guesses: &[String], dataset_path: Option<PathBuf>) {
    let (number, date) = resolve_challenge(number);
    let dataset = load_dataset(dataset_path);

    let (challenge, location) = match generate_with_location(number, &dataset, date) {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!("No valid challenge could be generated: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Challenge No. {} ({} letters, {})",
        challenge.id,
        challenge.answer_length,
        challenge.level.display_name()
    );
    println!();

    let mut game = Game::new(challenge, location);
    for guess in guesses {
        if game.is_over() {
            println!("The hunt is over; ignoring remaining guesses.");
            break;
        }

        match game.submit(guess, &dataset) {
            Ok(outcome) => display_outcome(guess, &outcome),
            Err(e) => println!("Skipping '{}': {}", guess, e),
        }
    }

    if !game.is_over() {
        println!();
        println!("Tries left: {}", game.tries_left());
    }

    if !game.guesses().is_empty() {
        display_share(&game);
    }
}
