mod app;
mod audio;
mod config;
mod library;
mod logging;
mod mpris;
mod player;
mod playlist;
mod runtime;
mod select;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
