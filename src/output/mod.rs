pub mod artifact;

use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

pub use artifact::write_artifact;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Status reporting on stdout, either as a plain line or as pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => println!("{text_line}"),
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(json_value)?),
        }
        Ok(())
    }

    /// Prints generated content byte for byte as it would be written to a file.
    /// JSON mode wraps it with its format name.
    pub fn content(&self, format: &str, content: &str) -> AppResult<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.render_content(format, content)?.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn render_content(&self, format: &str, content: &str) -> AppResult<String> {
        match self.mode {
            OutputMode::Text => Ok(content.to_string()),
            OutputMode::Json => {
                let payload = serde_json::json!({ "format": format, "content": content });
                Ok(format!("{}\n", serde_json::to_string_pretty(&payload)?))
            }
        }
    }
}
