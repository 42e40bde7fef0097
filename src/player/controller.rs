use std::time::Duration;

use crate::audio::{PlaybackError, PlaybackService};
use crate::library::Track;
use crate::playlist::Playlist;
use crate::select::FileSelectionService;

use super::progress::ProgressSnapshot;

/// The transport state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Glue between the playlist and the audio output.
///
/// The playlist decides *what* is current; the controller decides when it is
/// loaded, played, paused or dropped. All calls come from the event loop.
pub struct PlayerController<P> {
    playlist: Playlist<Track>,
    playback: P,
    state: PlaybackState,
}

impl<P: PlaybackService> PlayerController<P> {
    pub fn new(playback: P) -> Self {
        Self {
            playlist: Playlist::new(),
            playback,
            state: PlaybackState::Stopped,
        }
    }

    pub fn playlist(&self) -> &Playlist<Track> {
        &self.playlist
    }

    pub fn playback(&self) -> &P {
        &self.playback
    }

    #[cfg(test)]
    pub(crate) fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current()
    }

    /// Label for the status line.
    pub fn now_playing_label(&self) -> String {
        match self.current_track() {
            Some(t) => format!("Current: {}", t.name),
            None => "Current: None".to_string(),
        }
    }

    /// Append a track. The cursor only moves if the playlist was empty.
    pub fn add_track(&mut self, track: Track) {
        log::info!("added {}", track.path.display());
        self.playlist.append(track);
    }

    /// Ask `selection` for a locator and append it. Returns whether a track was added.
    pub fn add_from<S: FileSelectionService + ?Sized>(&mut self, selection: &mut S) -> bool {
        match selection.select() {
            Some(path) => {
                self.add_track(Track::from_path(&path));
                true
            }
            None => false,
        }
    }

    /// Stop playback and drop the current track from the playlist.
    pub fn delete_current(&mut self) -> Option<Track> {
        self.stop();
        let removed = self.playlist.delete_current();
        if let Some(t) = &removed {
            log::info!("removed {}", t.path.display());
        }
        removed
    }

    /// Load and start the current track from the beginning.
    ///
    /// Returns `Ok(false)` when the playlist is empty. On a load failure the
    /// player ends up stopped.
    pub fn play(&mut self) -> Result<bool, PlaybackError> {
        let Some(track) = self.playlist.current() else {
            return Ok(false);
        };

        if let Err(e) = self.playback.load(&track.path) {
            self.state = PlaybackState::Stopped;
            return Err(e);
        }
        self.playback.play();
        self.state = PlaybackState::Playing;
        log::info!("playing {}", track.path.display());
        Ok(true)
    }

    /// Pause, but only while something is audibly playing.
    pub fn pause(&mut self) {
        if self.playback.is_busy() {
            self.playback.pause();
            self.state = PlaybackState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.playback.play();
            self.state = PlaybackState::Playing;
        }
    }

    pub fn toggle_pause(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Stopped => {
                self.play()?;
            }
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        self.playback.stop();
        self.state = PlaybackState::Stopped;
    }

    /// Advance and play. At the tail the cursor stays put and the tail restarts.
    pub fn next(&mut self) -> Result<bool, PlaybackError> {
        self.playlist.advance();
        self.play()
    }

    /// Go back and play. At the head the cursor stays put and the head restarts.
    pub fn previous(&mut self) -> Result<bool, PlaybackError> {
        self.playlist.go_back();
        self.play()
    }

    /// Move the cursor forward without touching playback.
    pub fn step_forward(&mut self) -> bool {
        self.playlist.advance()
    }

    /// Move the cursor back without touching playback.
    pub fn step_back(&mut self) -> bool {
        self.playlist.go_back()
    }

    /// Jump to `position`, clamped to the track length. Ignored unless playing.
    pub fn seek(&mut self, position: Duration) -> Result<(), PlaybackError> {
        if !self.playback.is_busy() {
            return Ok(());
        }
        let target = match self.playback.duration() {
            Some(total) => position.min(total),
            None => position,
        };
        self.playback.seek(target)
    }

    /// Seek relative to the current position.
    pub fn seek_by(&mut self, seconds: i64) -> Result<(), PlaybackError> {
        let offset = Duration::from_secs(seconds.unsigned_abs());
        let now = self.playback.position();
        let target = if seconds < 0 {
            now.saturating_sub(offset)
        } else {
            now.saturating_add(offset)
        };
        self.seek(target)
    }

    /// Read the playback position. Only meaningful while playing; when the
    /// source has run out the player moves to `Stopped`.
    pub fn poll(&mut self) -> Option<ProgressSnapshot> {
        if self.state != PlaybackState::Playing {
            return None;
        }

        let snapshot = ProgressSnapshot {
            elapsed: self.playback.position(),
            total: self.playback.duration(),
        };
        if !self.playback.is_busy() {
            log::debug!("playback finished");
            self.state = PlaybackState::Stopped;
        }
        Some(snapshot)
    }
}
