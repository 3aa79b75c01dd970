//! Batch record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique batch run identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(pub Uuid);

impl BatchId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for BatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for BatchId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Batch run status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum BatchStatus {
    Running,
    Completed,
    Failed { error: String },
}

impl BatchStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BatchStatus::Running)
    }
}

/// Record of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    /// Code of the configuration that was run.
    pub code: String,
    pub status: BatchStatus,
    /// Records processed successfully.
    pub done: u64,
    /// Records (or phases) that failed.
    pub anomaly: u64,
    pub comments: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Batch {
    pub fn start(code: impl Into<String>) -> Self {
        Self {
            id: BatchId::new(),
            code: code.into(),
            status: BatchStatus::Running,
            done: 0,
            anomaly: 0,
            comments: None,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn increment_done(&mut self) {
        self.done += 1;
    }

    pub fn increment_done_by(&mut self, count: u64) {
        self.done += count;
    }

    pub fn increment_anomaly(&mut self) {
        self.anomaly += 1;
    }

    /// Append a comment line.
    pub fn add_comment(&mut self, comment: impl AsRef<str>) {
        let comment = comment.as_ref();
        match &mut self.comments {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(comment);
            }
            None => self.comments = Some(comment.to_string()),
        }
    }

    pub fn mark_completed(&mut self) {
        self.status = BatchStatus::Completed;
        self.ended_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self, error: String) {
        self.status = BatchStatus::Failed { error };
        self.increment_anomaly();
        self.ended_at = Some(Utc::now());
    }
}
