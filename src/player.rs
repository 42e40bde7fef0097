//! Player controller: the playlist plus an audio output plus a transport state.

mod controller;
mod progress;

pub use controller::{PlaybackState, PlayerController};
pub use progress::{ProgressSnapshot, Ticker};
