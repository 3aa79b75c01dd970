use serde::{Deserialize, Serialize};

/// Reference to a stored file (logo, picture, signature).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaFile {
    pub file_name: String,
    pub file_path: String,
}

impl MetaFile {
    pub fn new(file_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_path: file_path.into(),
        }
    }
}
