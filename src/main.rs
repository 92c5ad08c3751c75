//! rShopTrace main entrypoint.

use rshoptrace::run;
use rshoptrace::ui::messages::error;

fn main() {
    let (global_level, crate_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("rshoptrace"), crate_level)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
