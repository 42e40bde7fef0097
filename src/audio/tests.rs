use super::fake::{Call, FakePlayback};
use super::{PlaybackError, PlaybackService};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[test]
fn playback_error_messages_name_the_file() {
    let e = PlaybackError::Decode {
        path: PathBuf::from("/music/a.mp3"),
        reason: "bad header".to_string(),
    };
    assert_eq!(e.to_string(), "cannot decode /music/a.mp3: bad header");

    let e = PlaybackError::Open {
        path: PathBuf::from("/music/gone.wav"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(e.to_string(), "cannot open /music/gone.wav: no such file");
    assert!(std::error::Error::source(&e).is_some());
}

#[test]
fn fake_follows_the_service_contract() {
    let mut p = FakePlayback::default();
    assert!(!p.is_busy());
    assert!(matches!(p.seek(Duration::ZERO), Err(PlaybackError::NotLoaded)));

    p.load(Path::new("/a.mp3")).unwrap();
    assert!(!p.is_busy(), "load leaves the source paused");

    p.play();
    assert!(p.is_busy());
    p.run_for(Duration::from_secs(200));
    assert!(!p.is_busy(), "finished sources are not busy");

    p.stop();
    assert_eq!(p.duration(), None);
    assert_eq!(
        p.calls,
        vec![
            Call::Seek(Duration::ZERO),
            Call::Load(PathBuf::from("/a.mp3")),
            Call::Play,
            Call::Stop
        ]
    );
}
