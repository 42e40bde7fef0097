use std::path::PathBuf;
use std::time::Duration;

use crate::app::App;
use crate::audio::PlaybackService;
use crate::mpris::MprisHandle;
use crate::player::PlaybackState;

/// What was last pushed to MPRIS, so unchanged state is not republished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Published {
    playback: PlaybackState,
    path: Option<PathBuf>,
    length: Option<Duration>,
}

impl Published {
    pub fn of<P: PlaybackService>(app: &App<P>) -> Self {
        Self {
            playback: app.player.state(),
            path: app.player.current_track().map(|t| t.path.clone()),
            length: app.player.playback().duration(),
        }
    }
}

/// Push the current track and transport state if they changed since `last`.
pub fn update_mpris<P: PlaybackService>(mpris: &MprisHandle, app: &App<P>, last: &mut Published) {
    let now = Published::of(app);
    if now == *last {
        return;
    }
    mpris.set_track(app.player.current_track(), now.length);
    mpris.set_playback(now.playback);
    *last = now;
}
