use crate::app::App;
use crate::audio::PlaybackService;
use crate::select::SeedPaths;

/// Fill the playlist from command-line paths. The cursor lands on the first one.
pub fn seed_playlist<P: PlaybackService>(app: &mut App<P>, seed: &mut SeedPaths) {
    let requested = seed.len();
    let added = app.add_all(seed);
    log::info!("seeded playlist with {added} of {requested} tracks");

    if added > 0 {
        app.set_notice(format!("{added} tracks loaded. Press enter to play."));
    } else {
        app.set_notice("Playlist is empty. Press a to add a file.");
    }
}
