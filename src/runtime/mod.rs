use std::env;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::RodioPlayback;
use crate::logging;
use crate::mpris::ControlCmd;
use crate::player::PlayerController;
use crate::select::{PathPrompt, SeedPaths};

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();

    // Stderr is still ours until the alternate screen is entered.
    match logging::init(&settings.log) {
        Ok(Some(path)) => log::info!("logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("reprise: logging disabled: {e}"),
    }
    if let Some(msg) = config_warning {
        eprintln!("reprise: {msg}");
        log::warn!("{msg}");
    }

    let mut seed = SeedPaths::new(env::args_os().skip(1), &settings.selection);

    let playback = RodioPlayback::open(&settings.audio)?;
    let mut app = App::new(
        PlayerController::new(playback),
        PathPrompt::new(settings.selection.extensions.clone()),
        Duration::from_millis(settings.playback.poll_interval_ms),
    );
    startup::seed_playlist(&mut app, &mut seed);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = settings
        .mpris
        .enabled
        .then(|| crate::mpris::spawn_mpris(control_tx.clone()));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();

        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            mpris.as_ref(),
            &control_tx,
            &control_rx,
            &mut state,
        )
    })();

    app.stop();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        log::error!("event loop failed: {e}");
    }
    run_result
}
