//! Directory Materializer

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::pipeline::PipelineError;

/// Create every directory in `dirs` that does not exist yet, ancestors included.
///
/// Returns the directories this call created; a second call with the same
/// input returns an empty list.
pub fn ensure_directories<P: AsRef<Path>>(dirs: &[P]) -> Result<Vec<PathBuf>, PipelineError> {
    let mut created = vec![];

    for dir in dirs {
        let dir = dir.as_ref();
        if dir.is_dir() {
            debug!(path = %dir.display(), "directory already present");
            continue;
        }

        fs::create_dir_all(dir).map_err(|source| PipelineError::CreateDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        info!("📁 Created directory: {}", dir.display());
        created.push(dir.to_path_buf());
    }

    Ok(created)
}
