//! Track values and helpers for turning paths into playable locators.

mod model;
mod probe;
mod scan;

pub use model::Track;
pub use probe::probe_duration;
pub use scan::{expand_dir, is_audio_file};
