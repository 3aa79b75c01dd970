//! Batch runner: start, process, stop.

use std::sync::Arc;

use tracing::{error, info};

use crate::password::PasswordError;
use crate::repository::RepositoryError;

use super::store::BatchStore;
use super::types::Batch;

/// Batch error.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("password change batch not found: {0}")]
    ConfigNotFound(i64),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Work done by one kind of batch.
pub trait BatchProcess {
    /// Do the work, counting processed records on `batch`.
    fn process(&self, batch: &mut Batch) -> Result<(), BatchError>;

    /// Called once `process` succeeded, before the batch is closed.
    fn stop(&self, _batch: &mut Batch) {}
}

/// Runs batch processes and keeps their records in a [`BatchStore`].
///
/// A failing process does not make `run` fail: the error is recorded on the
/// returned batch. Only store failures are returned as errors.
#[derive(Clone)]
pub struct BatchRunner {
    store: Arc<dyn BatchStore>,
}

impl BatchRunner {
    pub fn new(store: Arc<dyn BatchStore>) -> Self {
        Self { store }
    }

    pub fn run(&self, code: &str, process: &dyn BatchProcess) -> Result<Batch, BatchError> {
        let mut batch = Batch::start(code);
        self.store.insert(&batch)?;
        info!(batch_id = %batch.id, code, "batch started");

        match process.process(&mut batch) {
            Ok(()) => {
                process.stop(&mut batch);
                batch.mark_completed();
                info!(
                    batch_id = %batch.id,
                    code,
                    done = batch.done,
                    anomaly = batch.anomaly,
                    "batch completed"
                );
            }
            Err(e) => {
                error!(batch_id = %batch.id, code, error = %e, "batch failed");
                batch.add_comment(e.to_string());
                batch.mark_failed(e.to_string());
            }
        }

        self.store.update(&batch)?;
        Ok(batch)
    }
}

impl std::fmt::Debug for BatchRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchRunner").finish_non_exhaustive()
    }
}
