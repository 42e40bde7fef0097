use std::collections::VecDeque;
use std::path::PathBuf;

use crate::config::SelectionSettings;
use crate::library::expand_dir;

use super::{FileSelectionService, validate_locator};

/// Locators taken from command-line arguments, handed out in order.
#[derive(Debug, Default)]
pub struct SeedPaths {
    queue: VecDeque<PathBuf>,
}

impl SeedPaths {
    /// Expand directories and drop anything that isn't a playable file.
    pub fn new<I>(args: I, settings: &SelectionSettings) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let mut queue = VecDeque::new();
        for arg in args {
            let path: PathBuf = arg.into();
            if path.is_dir() {
                let found = expand_dir(&path, settings);
                log::info!("{}: {} audio files", path.display(), found.len());
                queue.extend(found);
                continue;
            }
            match validate_locator(&path, &settings.extensions) {
                Ok(p) => queue.push_back(p),
                Err(e) => log::warn!("skipping argument: {e}"),
            }
        }
        Self { queue }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl FileSelectionService for SeedPaths {
    fn select(&mut self) -> Option<PathBuf> {
        self.queue.pop_front()
    }
}
