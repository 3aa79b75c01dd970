//! Batch runs: start, process, stop, with a persisted record of each run.
//!
//! ## Components
//!
//! - `Batch`: record of a run (status, counters, comments, timestamps)
//! - `BatchStore`: persistence for batch records (in-memory for tests/dev)
//! - `BatchRunner`: drives a `BatchProcess` and records the outcome
//! - `PasswordChangeBatchService`: password rotation over stale accounts

pub mod password_change;
pub mod runner;
pub mod store;
pub mod types;

pub use password_change::PasswordChangeBatchService;
pub use runner::{BatchError, BatchProcess, BatchRunner};
pub use store::{BatchStore, InMemoryBatchStore};
pub use types::{Batch, BatchId, BatchStatus};
