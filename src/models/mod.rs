pub mod challenge;
pub mod city;
pub mod config;
pub mod country;
pub mod dataset;
pub mod difficulty;
pub mod schedule;
pub mod seed;

pub use challenge::{Challenge, CLUE_COUNT};
pub use city::{normalize_letters, City};
// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use country::{Country, FlagTable};
pub use dataset::Dataset;
pub use difficulty::{Difficulty, Tiers};
pub use seed::Seed;
