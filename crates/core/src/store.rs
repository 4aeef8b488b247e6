//! Persisted dataset with an in-process cached copy.
//!
//! The store is constructed unloaded, filled once by [`DatasetStore::load`]
//! at startup, and then only ever swapped wholesale by
//! [`DatasetStore::replace`] after a new dataset has fully validated.

use crate::dataset::Dataset;
use crate::error::StoreResult;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Read a persisted dataset. A missing file is `Ok(None)`.
pub fn read(path: &Path) -> StoreResult<Option<Dataset>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Write a dataset as 2-space indented JSON, replacing any existing file.
///
/// The document goes to a uniquely named sibling file that is renamed into
/// place, so readers of the file never see a half-written document.
pub fn persist(path: &Path, dataset: &Dataset) -> StoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };

    let mut json = serde_json::to_vec_pretty(dataset)?;
    json.push(b'\n');

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// The current dataset, cached in memory and mirrored to one JSON file.
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    current: RwLock<Option<Arc<Dataset>>>,
    /// Held across persist and swap so the file and the cache agree.
    writer: Mutex<()>,
}

impl DatasetStore {
    /// Create an unloaded store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: RwLock::new(None),
            writer: Mutex::new(()),
        }
    }

    /// Location of the persisted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted dataset into the cache.
    ///
    /// A missing file yields the empty template. An unreadable or malformed
    /// file is treated the same way, with a warning.
    pub fn load(&self) -> Arc<Dataset> {
        let dataset = match read(&self.path) {
            Ok(Some(dataset)) => {
                info!(
                    path = %self.path.display(),
                    matches = dataset.matches.len(),
                    players = dataset.players.len(),
                    "Loaded persisted dataset"
                );
                dataset
            }
            Ok(None) => {
                info!(path = %self.path.display(), "No persisted dataset, starting from template");
                Dataset::template()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Persisted dataset is unreadable, starting from template"
                );
                Dataset::template()
            }
        };

        let dataset = Arc::new(dataset);
        *self.write_slot() = Some(Arc::clone(&dataset));
        dataset
    }

    /// The cached dataset, or `None` before [`DatasetStore::load`].
    #[must_use]
    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.read_slot().clone()
    }

    /// Persist `dataset` and make it the cached copy.
    ///
    /// If writing the file fails the cache keeps its previous value.
    /// Concurrent calls are applied one at a time.
    pub fn replace(&self, dataset: Dataset) -> StoreResult<Arc<Dataset>> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        persist(&self.path, &dataset)?;
        debug!(path = %self.path.display(), "Persisted dataset");

        let dataset = Arc::new(dataset);
        *self.write_slot() = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Option<Arc<Dataset>>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<Arc<Dataset>>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}
