use crate::game::{Game, Outcome};
use crate::models::Challenge;

pub fn display_challenge(challenge: &Challenge) {
    println!("\n{}", "=".repeat(60));
    println!("  TREZZLE - Daily Treasure Hunt");
    println!("{}\n", "=".repeat(60));

    println!("Challenge No. {} ({})", challenge.id, challenge.date);
    println!("Difficulty Level: {}", challenge.level.display_name());
    println!(
        "Answer: {}  ({} letters)\n",
        challenge.masked_answer(),
        challenge.answer_length
    );

    println!("{}", "-".repeat(60));
    println!("🗺️ Clues");
    for clue in &challenge.clues {
        println!("  ✦ {}", clue);
    }
    println!("{}", "-".repeat(60));

    println!("\n{}", "=".repeat(60));
    println!("Run `trezzle play {} <guess>...` to hunt for the treasure", challenge.id);
    println!("{}\n", "=".repeat(60));
}

pub fn display_outcome(guess: &str, outcome: &Outcome) {
    let marker = match outcome {
        Outcome::Solved { .. } => "🟩",
        _ => "🟥",
    };
    println!("{} {}", marker, guess.trim());
    println!("   {}", outcome.message());
}

pub fn display_share(game: &Game) {
    println!();
    println!("{}", "-".repeat(60));
    print!("{}", game.share_text());
    println!("{}", "-".repeat(60));
}
