//! Background document loading
//!
//! Runs `load_document` on a worker thread so a caller's event loop can keep
//! going and poll for the result.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::Mutex;
use pistachio_core::Document;

use crate::error::PersistenceError;
use crate::port::DocumentPersistence;

/// Progress of a background load
#[derive(Debug, Default)]
enum LoadStatus {
    /// Load in progress
    #[default]
    Loading,
    /// Load finished successfully
    Loaded(Document),
    /// Load failed
    Failed(PersistenceError),
    /// The result has already been taken by [`BackgroundLoad::poll`]
    Taken,
}

/// Handle to a document load running on another thread
pub struct BackgroundLoad {
    path: PathBuf,
    status: Arc<Mutex<LoadStatus>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundLoad {
    /// Start loading `path` with `adapter` on a new thread
    pub fn spawn(adapter: Arc<dyn DocumentPersistence>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let status = Arc::new(Mutex::new(LoadStatus::Loading));

        let worker = {
            let status = Arc::clone(&status);
            let path = path.clone();
            std::thread::spawn(move || {
                let result = match adapter.load_document(&path) {
                    Ok(document) => LoadStatus::Loaded(document),
                    Err(e) => {
                        tracing::warn!("Background load of {:?} failed: {}", path, e);
                        LoadStatus::Failed(e)
                    }
                };
                *status.lock() = result;
            })
        };

        tracing::debug!("Started background load of {:?}", path);
        Self {
            path,
            status,
            worker: Some(worker),
        }
    }

    /// Path being loaded
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the worker has stored a result yet
    pub fn is_finished(&self) -> bool {
        !matches!(*self.status.lock(), LoadStatus::Loading)
    }

    /// Take the result if the load has finished
    ///
    /// Returns `None` while loading, and after the result has been taken once.
    pub fn poll(&mut self) -> Option<Result<Document, PersistenceError>> {
        let mut status = self.status.lock();
        match std::mem::replace(&mut *status, LoadStatus::Taken) {
            LoadStatus::Loaded(document) => Some(Ok(document)),
            LoadStatus::Failed(e) => Some(Err(e)),
            pending @ (LoadStatus::Loading | LoadStatus::Taken) => {
                *status = pending;
                None
            }
        }
    }

    /// Block until the load finishes and return its result
    ///
    /// Returns `None` only if the result was already taken by [`poll`](Self::poll)
    /// or the worker thread panicked.
    pub fn wait(mut self) -> Option<Result<Document, PersistenceError>> {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Background load worker for {:?} panicked", self.path);
                return None;
            }
        }
        self.poll()
    }
}
