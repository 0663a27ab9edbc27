use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::city::normalize_letters;
use super::difficulty::Difficulty;

pub const CLUE_COUNT: usize = 5;

/// One generated puzzle. Callers own it and decide how to persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: u64,
    pub date: NaiveDate,
    pub level: Difficulty,
    pub answer: String,
    pub answer_length: usize,
    pub clues: [String; CLUE_COUNT],
    pub fact: String,
}

impl Challenge {
    pub fn new(
        id: u64,
        date: NaiveDate,
        level: Difficulty,
        city: &str,
        country: &str,
        clues: [String; CLUE_COUNT],
    ) -> Self {
        Self {
            id,
            date,
            level,
            answer: city.to_string(),
            answer_length: answer_length(city),
            clues,
            fact: format!(
                "👑 The treasure is located in the city of {} in {}.",
                city, country
            ),
        }
    }

    pub fn answer_letters(&self) -> String {
        normalize_letters(&self.answer)
    }

    /// Answer with letters hidden, keeping spaces and punctuation in place.
    pub fn masked_answer(&self) -> String {
        self.answer
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { '_' } else { c })
            .collect()
    }
}

pub fn answer_length(answer: &str) -> usize {
    answer.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Challenge {
        let clues = std::array::from_fn(|i| format!("clue {}", i + 1));
        Challenge::new(
            12,
            NaiveDate::from_ymd_opt(2024, 9, 12).unwrap(),
            Difficulty::Hard,
            "Port-au-Prince",
            "Haiti",
            clues,
        )
    }

    #[test]
    fn test_answer_length_skips_non_letters() {
        assert_eq!(answer_length("Lima"), 4);
        assert_eq!(answer_length("Port-au-Prince"), 12);
        assert_eq!(answer_length("St. John's"), 7);
        assert_eq!(answer_length(""), 0);
    }

    #[test]
    fn test_new_builds_fact_and_length() {
        let challenge = sample();
        assert_eq!(challenge.answer_length, 12);
        assert_eq!(
            challenge.fact,
            "👑 The treasure is located in the city of Port-au-Prince in Haiti."
        );
        assert_eq!(challenge.masked_answer(), "____-__-______");
        assert_eq!(challenge.answer_letters(), "PORTAUPRINCE");
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], 12);
        assert_eq!(value["date"], "2024-09-12");
        assert_eq!(value["level"], "Hard");
        assert_eq!(value["answer_length"], 12);
        assert_eq!(value["clues"].as_array().unwrap().len(), CLUE_COUNT);
    }
}
