use std::path::Path;
use std::time::Duration;

use super::PlaybackError;

/// What the player needs from an audio output.
///
/// One source is loaded at a time. `load` replaces it and leaves it paused at
/// the start; `play` starts or resumes it.
pub trait PlaybackService {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError>;

    fn play(&mut self);

    fn pause(&mut self);

    /// Stop and unload the current source.
    fn stop(&mut self);

    fn seek(&mut self, position: Duration) -> Result<(), PlaybackError>;

    /// Elapsed time in the loaded source.
    fn position(&self) -> Duration;

    /// Total length of the loaded source, when known.
    fn duration(&self) -> Option<Duration>;

    /// `true` while a source is loaded, unpaused and not yet finished.
    fn is_busy(&self) -> bool;
}
