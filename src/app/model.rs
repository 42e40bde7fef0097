//! Application model: the player plus the UI-only state around it.

use std::time::{Duration, Instant};

use crate::audio::{PlaybackError, PlaybackService};
use crate::player::{PlaybackState, PlayerController, ProgressSnapshot, Ticker};
use crate::select::{FileSelectionService, PathPrompt};

/// The main application model.
pub struct App<P> {
    pub player: PlayerController<P>,
    pub prompt: PathPrompt,
    pub prompt_open: bool,
    /// One-line message for the user (errors, confirmations).
    pub notice: Option<String>,
    /// Last polled position; cleared when playback stops.
    pub progress: Option<ProgressSnapshot>,
    ticker: Ticker,
}

impl<P: PlaybackService> App<P> {
    pub fn new(player: PlayerController<P>, prompt: PathPrompt, poll_interval: Duration) -> Self {
        Self {
            player,
            prompt,
            prompt_open: false,
            notice: None,
            progress: None,
            ticker: Ticker::new(poll_interval),
        }
    }

    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn open_prompt(&mut self) {
        self.prompt.clear();
        self.prompt_open = true;
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt.clear();
        self.prompt_open = false;
    }

    /// Try to add the typed path. The prompt stays open on a rejected path.
    pub fn submit_prompt(&mut self) {
        if self.prompt.input().trim().is_empty() {
            self.cancel_prompt();
            return;
        }
        if self.player.add_from(&mut self.prompt) {
            self.prompt_open = false;
            if let Some(t) = self.player.playlist().tail() {
                self.notice = Some(format!("Added {}", t.name));
            }
        } else if let Some(e) = self.prompt.last_error() {
            self.notice = Some(e.to_string());
        }
    }

    /// Add everything `selection` yields; returns how many tracks were added.
    pub fn add_all<S: FileSelectionService>(&mut self, selection: &mut S) -> usize {
        let mut added = 0;
        while self.player.add_from(selection) {
            added += 1;
        }
        added
    }

    pub fn play(&mut self) {
        let res = self.player.play();
        self.after_transport(res.map(|_| ()));
    }

    pub fn toggle_pause(&mut self) {
        let res = self.player.toggle_pause();
        self.after_transport(res);
    }

    pub fn next(&mut self) {
        let res = self.player.next();
        self.after_transport(res.map(|_| ()));
    }

    pub fn previous(&mut self) {
        let res = self.player.previous();
        self.after_transport(res.map(|_| ()));
    }

    pub fn stop(&mut self) {
        self.player.stop();
        self.after_transport(Ok(()));
    }

    pub fn delete_current(&mut self) {
        let removed = self.player.delete_current();
        self.after_transport(Ok(()));
        if let Some(t) = removed {
            self.set_notice(format!("Removed {}", t.name));
        }
    }

    pub fn seek_by(&mut self, seconds: i64) {
        let res = self.player.seek_by(seconds);
        self.after_transport(res);
        // Show the new position right away instead of waiting a full tick.
        self.ticker.reset();
    }

    /// Poll playback progress if the ticker says so. Only runs while playing.
    pub fn tick(&mut self, now: Instant) {
        if self.player.state() != PlaybackState::Playing {
            return;
        }
        if self.ticker.due(now) {
            self.progress = self.player.poll();
            if self.player.state() != PlaybackState::Playing {
                self.ticker.reset();
            }
        }
    }

    /// Common bookkeeping after any transport command.
    fn after_transport(&mut self, res: Result<(), PlaybackError>) {
        if let Err(e) = res {
            log::error!("{e}");
            self.set_notice(e.to_string());
        }
        match self.player.state() {
            PlaybackState::Playing => {
                // New source or resumed: poll on the next loop turn.
                self.ticker.reset();
            }
            PlaybackState::Paused => {}
            PlaybackState::Stopped => {
                self.ticker.reset();
                self.progress = None;
            }
        }
    }
}
