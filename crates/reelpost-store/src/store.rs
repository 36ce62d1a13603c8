use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::posted::PostedIds;

#[derive(Deserialize)]
struct StateFile {
    #[serde(default)]
    posted_reviews: Vec<String>,
}

#[derive(Serialize)]
struct StateFileRef<'a> {
    posted_reviews: &'a [String],
}

/// JSON file holding the ids of reviews already posted.
#[derive(Debug, Clone)]
pub struct DedupStore {
    path: PathBuf,
}

impl DedupStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted id set.
    ///
    /// A missing, unreadable or malformed file is treated as "no history" and
    /// yields an empty set.
    #[must_use]
    pub fn load(&self) -> PostedIds {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no dedup file yet");
                return PostedIds::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "dedup file unreadable, starting empty");
                return PostedIds::new();
            }
        };

        match serde_json::from_str::<StateFile>(&content) {
            Ok(state) => state.posted_reviews.into_iter().collect(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "dedup file corrupt, starting empty");
                PostedIds::new()
            }
        }
    }

    /// Overwrites the persisted file with `ids`, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file (or its parent directory) cannot
    /// be written.
    pub fn save(&self, ids: &PostedIds) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut body = serde_json::to_string_pretty(&StateFileRef {
            posted_reviews: ids.as_slice(),
        })?;
        body.push('\n');

        std::fs::write(&self.path, body).map_err(io_err)?;
        tracing::debug!(path = %self.path.display(), count = ids.len(), "saved dedup file");
        Ok(())
    }
}
