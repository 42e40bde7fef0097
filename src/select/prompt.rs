use std::env;
use std::path::PathBuf;

use super::{FileSelectionService, SelectError, validate_locator};

/// Single-line path editor shown by the UI when adding a track.
#[derive(Debug, Default)]
pub struct PathPrompt {
    input: String,
    extensions: Vec<String>,
    last_error: Option<SelectError>,
}

impl PathPrompt {
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            input: String::new(),
            extensions,
            last_error: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
        self.last_error = None;
    }

    pub fn pop(&mut self) {
        self.input.pop();
        self.last_error = None;
    }

    /// Drop the typed text; used on cancel.
    pub fn clear(&mut self) {
        self.input.clear();
        self.last_error = None;
    }

    /// Why the last submission was rejected, if it was.
    pub fn last_error(&self) -> Option<&SelectError> {
        self.last_error.as_ref()
    }
}

/// Expand a leading `~/` to `$HOME`.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(raw)
}

impl FileSelectionService for PathPrompt {
    /// Consume the typed path. A blank line counts as cancel; a rejected path
    /// keeps the text so it can be corrected.
    fn select(&mut self) -> Option<PathBuf> {
        let raw = self.input.trim();
        if raw.is_empty() {
            self.clear();
            return None;
        }

        match validate_locator(&expand_home(raw), &self.extensions) {
            Ok(path) => {
                self.clear();
                Some(path)
            }
            Err(e) => {
                log::info!("rejected path: {e}");
                self.last_error = Some(e);
                None
            }
        }
    }
}
