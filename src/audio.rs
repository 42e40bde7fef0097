//! Audio playback behind the `PlaybackService` trait.
//!
//! The player only talks to the trait; `RodioPlayback` is the real output
//! and tests use an in-memory double.

mod backend;
mod error;
mod service;
mod sink;

pub use backend::RodioPlayback;
pub use error::PlaybackError;
pub use service::PlaybackService;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod tests;
