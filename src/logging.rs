//! File logger setup.
//!
//! The terminal belongs to the UI, so records go to a log file only.

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::config::{self, LogSettings};

/// Install the global `log` dispatcher. Returns the file being written to,
/// or `None` when logging is turned off or no path could be resolved.
pub fn init(settings: &LogSettings) -> Result<Option<PathBuf>, fern::InitError> {
    let level: log::LevelFilter = settings.level.into();
    if level == log::LevelFilter::Off {
        return Ok(None);
    }

    let Some(path) = settings.file.clone().or_else(config::default_log_path) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    dispatch(level)
        .chain(fern::log_file(&path)?)
        .apply()?;

    Ok(Some(path))
}

fn dispatch(level: log::LevelFilter) -> fern::Dispatch {
    let quiet = level.min(log::LevelFilter::Warn);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .level_for("symphonia_core", quiet)
        .level_for("symphonia_bundle_mp3", quiet)
        .level_for("symphonia_format_riff", quiet)
        .level_for("zbus", quiet)
        .level_for("tracing", quiet)
}
