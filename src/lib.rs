pub mod cli;
pub mod clues;
pub mod display;
pub mod error;
pub mod game;
pub mod generator;
pub mod models;
pub mod store;
pub mod telemetry;

pub use error::GenerationError;
pub use generator::{generate, generate_today, generate_with_location};
pub use models::{Challenge, Dataset};
