use serde::Serialize;

use arbor_infra::batch::Batch;

/// Answer of a batch run: the flash message shown to the operator, and a hint
/// to reload the form.
#[derive(Debug, Serialize)]
pub struct RunBatchResponse {
    pub flash: Option<String>,
    pub reload: bool,
    pub batch: Batch,
}

impl From<Batch> for RunBatchResponse {
    fn from(batch: Batch) -> Self {
        Self {
            flash: batch.comments.clone(),
            reload: true,
            batch,
        }
    }
}
