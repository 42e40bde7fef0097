//! Scripted in-memory `PlaybackService` shared by tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{PlaybackError, PlaybackService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Stop,
    Seek(Duration),
}

#[derive(Debug)]
pub(crate) struct FakePlayback {
    pub calls: Vec<Call>,
    pub loaded: Option<PathBuf>,
    pub paused: bool,
    pub finished: bool,
    pub position: Duration,
    /// Length reported for every file that loads.
    pub length: Option<Duration>,
    /// Paths whose `load` fails with a decode error.
    pub broken: Vec<PathBuf>,
}

impl Default for FakePlayback {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            loaded: None,
            paused: true,
            finished: false,
            position: Duration::ZERO,
            length: Some(Duration::from_secs(180)),
            broken: Vec::new(),
        }
    }
}

impl FakePlayback {
    /// Pretend `d` of audio went by.
    pub fn run_for(&mut self, d: Duration) {
        if self.is_busy() {
            self.position += d;
            if self.length.is_some_and(|len| self.position >= len) {
                self.finished = true;
            }
        }
    }

    pub fn loads(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Load(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PlaybackService for FakePlayback {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        self.calls.push(Call::Load(path.to_path_buf()));
        self.loaded = None;
        if self.broken.iter().any(|p| p == path) {
            return Err(PlaybackError::Decode {
                path: path.to_path_buf(),
                reason: "unsupported format".to_string(),
            });
        }
        self.loaded = Some(path.to_path_buf());
        self.paused = true;
        self.finished = false;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
        if self.loaded.is_some() {
            self.paused = false;
        }
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
        self.paused = true;
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        self.loaded = None;
        self.paused = true;
        self.position = Duration::ZERO;
    }

    fn seek(&mut self, position: Duration) -> Result<(), PlaybackError> {
        self.calls.push(Call::Seek(position));
        if self.loaded.is_none() {
            return Err(PlaybackError::NotLoaded);
        }
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.loaded.as_ref().and(self.length)
    }

    fn is_busy(&self) -> bool {
        self.loaded.is_some() && !self.paused && !self.finished
    }
}
