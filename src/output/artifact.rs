use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{AppError, AppResult};

/// Writes generated content to `path`, replacing any existing file.
pub fn write_artifact(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| AppError::file("create", parent, err))?;
    }

    fs::write(path, content).map_err(|err| AppError::file("write", path, err))?;

    info!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(())
}
