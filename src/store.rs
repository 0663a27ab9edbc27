//! Caller-owned dataset snapshots.
//!
//! The generator never loads data itself. Front-ends keep a [`DatasetStore`],
//! ask it for a snapshot and pass that snapshot to the generator. When the
//! snapshot is reloaded is decided by the [`RefreshPolicy`] the store was built with.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::DatasetError;
use crate::models::Dataset;

pub trait DatasetSource {
    fn load(&self) -> Result<Dataset, DatasetError>;
}

/// A JSON snapshot on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn load(&self) -> Result<Dataset, DatasetError> {
        Dataset::load(&self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Load once and keep the snapshot for the life of the store.
    Never,
    /// Reload once the snapshot is older than the given age.
    After(Duration),
}

pub struct DatasetStore<S> {
    source: S,
    policy: RefreshPolicy,
    cached: Option<(Instant, Arc<Dataset>)>,
}

impl<S: DatasetSource> DatasetStore<S> {
    pub fn new(source: S, policy: RefreshPolicy) -> Self {
        Self {
            source,
            policy,
            cached: None,
        }
    }

    #[tracing::instrument(name = "Fetching dataset snapshot", skip(self))]
    pub fn snapshot(&mut self) -> Result<Arc<Dataset>, DatasetError> {
        self.snapshot_at(Instant::now())
    }

    fn snapshot_at(&mut self, now: Instant) -> Result<Arc<Dataset>, DatasetError> {
        if let Some((loaded_at, dataset)) = &self.cached {
            if !self.is_stale(*loaded_at, now) {
                return Ok(Arc::clone(dataset));
            }
            tracing::debug!("Dataset snapshot is stale, reloading");
        }

        let dataset = Arc::new(self.source.load()?);
        tracing::info!(
            cities = dataset.cities.len(),
            countries = dataset.countries.len(),
            "Dataset snapshot loaded"
        );
        self.cached = Some((now, Arc::clone(&dataset)));
        Ok(dataset)
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    fn is_stale(&self, loaded_at: Instant, now: Instant) -> bool {
        match self.policy {
            RefreshPolicy::Never => false,
            RefreshPolicy::After(max_age) => now.saturating_duration_since(loaded_at) >= max_age,
        }
    }
}
