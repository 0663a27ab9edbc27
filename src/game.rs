use crate::error::GameError;
use crate::models::{normalize_letters, Challenge, Dataset};

pub const MAX_TRIES: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Solved { fact: String },
    Miss { hint: String, tries_left: u8 },
    OutOfTries { answer: String },
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Solved { fact } => fact.clone(),
            Outcome::Miss { hint, tries_left } => {
                format!("Arrr! Wrong, mate! {} Tries left: {}", hint, tries_left)
            }
            Outcome::OutOfTries { answer } => format!("Out of tries! The answer was {}.", answer),
        }
    }
}

/// One play-through of a challenge.
#[derive(Debug, Clone)]
pub struct Game {
    challenge: Challenge,
    target: (f64, f64),
    tries_left: u8,
    guesses: Vec<String>,
    ended: bool,
}

impl Game {
    /// `target` is the `(lat, lng)` of the city the challenge was built from.
    pub fn new(challenge: Challenge, target: (f64, f64)) -> Self {
        Self {
            challenge,
            target,
            tries_left: MAX_TRIES,
            guesses: Vec::new(),
            ended: false,
        }
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn tries_left(&self) -> u8 {
        self.tries_left
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn is_over(&self) -> bool {
        self.ended
    }

    pub fn submit(&mut self, guess: &str, dataset: &Dataset) -> Result<Outcome, GameError> {
        if self.ended {
            return Err(GameError::AlreadyEnded);
        }

        let guess = normalize_letters(guess);
        if guess.is_empty() {
            return Err(GameError::EmptyGuess);
        }
        self.guesses.push(guess.clone());

        if guess == self.challenge.answer_letters() {
            self.ended = true;
            return Ok(Outcome::Solved {
                fact: self.challenge.fact.clone(),
            });
        }

        self.tries_left = self.tries_left.saturating_sub(1);
        if self.tries_left == 0 {
            self.ended = true;
            return Ok(Outcome::OutOfTries {
                answer: self.challenge.answer.clone(),
            });
        }

        Ok(Outcome::Miss {
            hint: self.direction_hint(&guess, dataset),
            tries_left: self.tries_left,
        })
    }

    fn direction_hint(&self, guess: &str, dataset: &Dataset) -> String {
        let guessed = dataset
            .find_city_by_letters(guess)
            .and_then(|city| city.coordinates());

        match guessed {
            Some(from) => direction_hint(from, self.target),
            None => "That place is unknown to our maps.".to_string(),
        }
    }

    /// Spoiler-free summary of the guesses so far.
    pub fn share_text(&self) -> String {
        let answer = self.challenge.answer_letters();
        let mut result = format!(
            "TREZZLE N.{} {}/{}\n\n",
            self.challenge.id,
            self.guesses.len(),
            MAX_TRIES
        );
        for (i, guess) in self.guesses.iter().enumerate() {
            let status = if *guess == answer { "🟩" } else { "🟥" };
            result.push_str(&format!("{}. {} {}\n", i + 1, guess, status));
        }
        result
    }
}

/// How far and which way to move from a guessed city to the target.
pub fn direction_hint(from: (f64, f64), to: (f64, f64)) -> String {
    let lat_diff = to.0 - from.0;
    let lng_diff = to.1 - from.1;
    let lat_direction = if lat_diff > 0.0 { "north" } else { "south" };
    let lng_direction = if lng_diff > 0.0 { "east" } else { "west" };

    format!(
        "You're off course! Try heading {:.1}° {} and {:.1}° {}.",
        lat_diff.abs(),
        lat_direction,
        lng_diff.abs(),
        lng_direction
    )
}
