//! Duo Pong entry point
//!
//! Loads settings, seeds the simulation and runs the window loop. Fatal
//! startup errors exit with their own status code.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use duo_pong::Settings;
use duo_pong::settings::SETTINGS_FILE;

fn main() {
    env_logger::init();
    log::info!("Pong starting...");

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE));
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    if let Err(e) = duo_pong::app::run(settings, seed) {
        log::error!("Fatal: {}", e);
        std::process::exit(e.exit_code());
    }
}
