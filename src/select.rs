//! Choosing files to add to the playlist.
//!
//! A `FileSelectionService` hands out one locator per call, or `None` when
//! the user backs out. The prompt is the interactive source; seed paths come
//! from the command line.

mod prompt;
mod seed;
mod validate;

pub use prompt::PathPrompt;
pub use seed::SeedPaths;
pub use validate::{SelectError, validate_locator};

use std::path::PathBuf;

pub trait FileSelectionService {
    /// Produce the next locator to add, or `None` on cancel.
    fn select(&mut self) -> Option<PathBuf>;
}

#[cfg(test)]
mod tests;
