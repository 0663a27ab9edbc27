use serde::{Deserialize, Serialize};

use super::city::City;

const EASY_ABOVE: u64 = 5_000_000;
const MEDIUM_ABOVE: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Draw order used by the generator.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_population(population: u64) -> Self {
        if population > EASY_ABOVE {
            Difficulty::Easy
        } else if population > MEDIUM_ABOVE {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Eligible cities split by population. Built fresh for every generation.
#[derive(Debug, Default)]
pub struct Tiers<'a> {
    pub easy: Vec<&'a City>,
    pub medium: Vec<&'a City>,
    pub hard: Vec<&'a City>,
}

impl<'a> Tiers<'a> {
    pub fn partition(cities: &'a [City]) -> Self {
        let mut tiers = Tiers::default();
        for city in cities {
            let Some(population) = city.eligible_population() else {
                continue;
            };
            match Difficulty::from_population(population) {
                Difficulty::Easy => tiers.easy.push(city),
                Difficulty::Medium => tiers.medium.push(city),
                Difficulty::Hard => tiers.hard.push(city),
            }
        }
        tiers
    }

    pub fn get(&self, level: Difficulty) -> &[&'a City] {
        match level {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}
