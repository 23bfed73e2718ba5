use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Backing storage for the color settings file.
pub trait ColorStore {
    /// Returns `None` when no settings have been persisted yet.
    fn load(&self) -> AppResult<Option<String>>;
    fn save(&self, contents: &str) -> AppResult<()>;
    fn location(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileColorStore {
    path: PathBuf,
}

impl FileColorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ColorStore for FileColorStore {
    fn load(&self) -> AppResult<Option<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AppError::file("open", &self.path, err)),
        };

        // Undecodable bytes only spoil their own line, which parsing then drops.
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn save(&self, contents: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| AppError::file("create", parent, err))?;
        }

        fs::write(&self.path, contents).map_err(|err| AppError::file("create", &self.path, err))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
