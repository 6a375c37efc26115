use crate::errors::{AppError, StorageError};
use crate::models::PlannerData;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Loads the stored document. A missing file is an empty planner; anything
/// else that cannot be read or parsed is an error, so the file is never
/// overwritten with an empty document.
pub async fn load_data(path: &Path) -> Result<PlannerData, StorageError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no data file yet, starting empty");
            return Ok(PlannerData::default());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
        path: path.display().to_string(),
        source,
    })
}

pub async fn persist_data(path: &Path, data: &PlannerData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    debug!(
        tasks = data.tasks.len(),
        leetcode = data.leetcode_tasks.len(),
        "persisted planner data"
    );
    Ok(())
}
