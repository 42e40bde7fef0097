use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::PlaybackService;
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::PlaybackState;
use crate::runtime::mpris_sync::{Published, update_mpris};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Last state emitted to MPRIS.
    pub published: Published,
}

/// Main terminal event loop: handles input, progress ticks, UI drawing and
/// MPRIS sync. Returns `Ok(())` when shutdown is requested.
pub fn run<P: PlaybackService>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<P>,
    mpris: Option<&MprisHandle>,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());

        // Covers changes from media keys and tracks running out, not just local keys.
        if let Some(mpris) = mpris {
            update_mpris(mpris, app, &mut state.published);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, control_tx) {
                    break;
                }
            }
        }
    }

    log::info!("quit requested");
    Ok(())
}

/// Apply a transport command from MPRIS or a forwarded key. Returns `true` on quit.
fn handle_control_cmd<P: PlaybackService>(cmd: ControlCmd, app: &mut App<P>) -> bool {
    log::debug!("control: {cmd:?}");
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => match app.player.state() {
            PlaybackState::Paused => app.toggle_pause(),
            PlaybackState::Stopped => app.play(),
            PlaybackState::Playing => {}
        },
        ControlCmd::Pause => {
            if app.player.state() == PlaybackState::Playing {
                app.toggle_pause();
            }
        }
        ControlCmd::PlayPause => app.toggle_pause(),
        ControlCmd::Stop => app.stop(),
        ControlCmd::Next => app.next(),
        ControlCmd::Prev => app.previous(),
    }
    false
}

/// Apply one key press. Returns `true` on quit.
fn handle_key_event<P: PlaybackService>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App<P>,
    control_tx: &mpsc::Sender<ControlCmd>,
) -> bool {
    if app.prompt_open {
        match key.code {
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.prompt.pop(),
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.prompt.clear();
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.prompt.push(c);
                }
            }
            _ => {}
        }
        return false;
    }

    let seek = i64::try_from(settings.controls.seek_seconds).unwrap_or(i64::MAX);
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('a') => {
            app.clear_notice();
            app.open_prompt();
        }
        KeyCode::Char('d') => app.delete_current(),
        KeyCode::Enter => app.play(),
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            // Behave like MPRIS PlayPause.
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('s') => {
            let _ = control_tx.send(ControlCmd::Stop);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.player.step_forward();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.player.step_back();
        }
        KeyCode::Char('L') => app.seek_by(seek),
        KeyCode::Char('H') => app.seek_by(-seek),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fake::FakePlayback;
    use crate::library::Track;
    use crate::player::PlayerController;
    use crate::select::PathPrompt;

    fn app_with(names: &[&str]) -> App<FakePlayback> {
        let mut player = PlayerController::new(FakePlayback::default());
        for n in names {
            player.add_track(Track::new(*n, format!("/music/{n}.mp3")));
        }
        App::new(
            player,
            PathPrompt::new(vec!["mp3".into()]),
            Duration::from_secs(1),
        )
    }

    fn press(
        app: &mut App<FakePlayback>,
        tx: &mpsc::Sender<ControlCmd>,
        code: KeyCode,
    ) -> bool {
        let settings = config::Settings::default();
        handle_key_event(KeyEvent::from(code), &settings, app, tx)
    }

    #[test]
    fn transport_keys_are_forwarded_as_control_commands() {
        let mut app = app_with(&["A"]);
        let (tx, rx) = mpsc::channel();

        for c in [' ', 'p', 'l', 'h', 's'] {
            assert!(!press(&mut app, &tx, KeyCode::Char(c)));
        }
        let got: Vec<ControlCmd> = rx.try_iter().collect();
        assert_eq!(
            got,
            vec![
                ControlCmd::PlayPause,
                ControlCmd::PlayPause,
                ControlCmd::Next,
                ControlCmd::Prev,
                ControlCmd::Stop,
            ]
        );
    }

    #[test]
    fn cursor_keys_do_not_start_playback() {
        let mut app = app_with(&["A", "B"]);
        let (tx, _rx) = mpsc::channel();

        press(&mut app, &tx, KeyCode::Char('j'));
        assert_eq!(app.player.now_playing_label(), "Current: B");
        press(&mut app, &tx, KeyCode::Char('k'));
        assert_eq!(app.player.now_playing_label(), "Current: A");
        assert_eq!(app.player.state(), PlaybackState::Stopped);

        press(&mut app, &tx, KeyCode::Enter);
        assert_eq!(app.player.state(), PlaybackState::Playing);
    }

    #[test]
    fn prompt_captures_typing_until_escape() {
        let mut app = app_with(&[]);
        let (tx, rx) = mpsc::channel();

        press(&mut app, &tx, KeyCode::Char('a'));
        assert!(app.prompt_open);
        for c in "q/x".chars() {
            assert!(!press(&mut app, &tx, KeyCode::Char(c)), "q is text here");
        }
        press(&mut app, &tx, KeyCode::Backspace);
        assert_eq!(app.prompt.input(), "q/");

        press(&mut app, &tx, KeyCode::Esc);
        assert!(!app.prompt_open);
        assert_eq!(app.prompt.input(), "");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn quit_key_and_command_end_the_loop() {
        let mut app = app_with(&[]);
        let (tx, _rx) = mpsc::channel();
        assert!(press(&mut app, &tx, KeyCode::Char('q')));
        assert!(handle_control_cmd(ControlCmd::Quit, &mut app));
    }

    #[test]
    fn control_commands_respect_current_state() {
        let mut app = app_with(&["A", "B"]);

        handle_control_cmd(ControlCmd::Pause, &mut app);
        assert_eq!(app.player.state(), PlaybackState::Stopped);

        handle_control_cmd(ControlCmd::Play, &mut app);
        assert_eq!(app.player.state(), PlaybackState::Playing);
        handle_control_cmd(ControlCmd::Play, &mut app);
        assert_eq!(app.player.playback().loads().len(), 1, "play while playing is a no-op");

        handle_control_cmd(ControlCmd::Pause, &mut app);
        assert_eq!(app.player.state(), PlaybackState::Paused);
        handle_control_cmd(ControlCmd::Play, &mut app);
        assert_eq!(app.player.state(), PlaybackState::Playing);

        handle_control_cmd(ControlCmd::Next, &mut app);
        assert_eq!(app.player.now_playing_label(), "Current: B");
        handle_control_cmd(ControlCmd::Stop, &mut app);
        assert_eq!(app.player.state(), PlaybackState::Stopped);
    }

    #[test]
    fn delete_key_removes_current() {
        let mut app = app_with(&["A", "B"]);
        let (tx, _rx) = mpsc::channel();
        press(&mut app, &tx, KeyCode::Char('d'));
        assert_eq!(app.player.playlist().len(), 1);
        assert_eq!(app.player.now_playing_label(), "Current: B");
    }
}
