use std::path::PathBuf;

use crate::models::Difficulty;

/// Reasons no challenge could be produced. Both point at the dataset, so
/// calling again with the same number fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("No locations found for level {}", .0.display_name())]
    EmptyTier(Difficulty),
    #[error("Could not find a valid location in level {}", .0.display_name())]
    NoValidLocation(Difficulty),
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("No dataset configured. Pass --dataset or set dataset_path in {}", .0.display())]
    MissingPath(PathBuf),
    #[error("Failed to read dataset {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse dataset {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("The game has already ended")]
    AlreadyEnded,
    #[error("A guess needs at least one letter")]
    EmptyGuess,
}

/// Writes an error followed by each of its sources.
pub fn error_chain_fmt(e: &impl std::error::Error) -> String {
    let mut out = e.to_string();
    let mut current = e.source();
    while let Some(cause) = current {
        out.push_str(&format!("\n  caused by: {}", cause));
        current = cause.source();
    }
    out
}
