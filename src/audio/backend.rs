use std::path::Path;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::library::probe_duration;

use super::sink::open_sink;
use super::{PlaybackError, PlaybackService};

/// `PlaybackService` on the default output device.
///
/// rodio mixes on its own thread; this struct only holds the stream and the
/// sink for the loaded file and is driven from the event loop.
pub struct RodioPlayback {
    stream: OutputStream,
    sink: Option<Sink>,
    duration: Option<Duration>,
    volume: f32,
}

impl RodioPlayback {
    pub fn open(settings: &AudioSettings) -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped; that would land on the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            duration: None,
            volume: settings.volume,
        })
    }
}

impl PlaybackService for RodioPlayback {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        self.stop();

        let (sink, total) = open_sink(&self.stream, path, self.volume)?;
        self.duration = total.or_else(|| probe_duration(path));
        self.sink = Some(sink);
        log::debug!("loaded {} ({:?})", path.display(), self.duration);
        Ok(())
    }

    fn play(&mut self) {
        if let Some(s) = &self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(s) = &self.sink {
            s.pause();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.duration = None;
    }

    fn seek(&mut self, position: Duration) -> Result<(), PlaybackError> {
        let sink = self.sink.as_ref().ok_or(PlaybackError::NotLoaded)?;
        sink.try_seek(position)
            .map_err(|e| PlaybackError::Seek(e.to_string()))
    }

    fn position(&self) -> Duration {
        self.sink
            .as_ref()
            .map(|s| s.get_pos())
            .unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }
}
