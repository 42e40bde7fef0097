use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;

/// Read the stream length of an audio file from its container properties.
///
/// Returns `None` when the file can't be parsed or reports no length.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let d = tagged.properties().duration();
            (!d.is_zero()).then_some(d)
        }
        Err(e) => {
            log::debug!("no duration for {}: {e}", path.display());
            None
        }
    }
}
