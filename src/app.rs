//! Application module: the state the TUI renders and the event loop mutates.
//!
//! `App` wraps the `PlayerController` with the add-track prompt, the last
//! notice shown to the user and the progress tick schedule.

mod model;

pub use model::*;
