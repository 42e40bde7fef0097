//! Cursor-based doubly linked playlist.
//!
//! Nodes live in an index arena owned by the `Playlist`; links are slot
//! indices. The list keeps a `head`, a `tail` and a `cursor` that marks the
//! active entry.

mod iter;
mod list;

pub use iter::Iter;
pub use list::Playlist;
