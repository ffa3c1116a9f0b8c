use clap::Parser;
use std::env;
use std::io;
use std::path::Path;
use std::process;

use nzpass::cli::{handlers, Args};
use nzpass::core::{parse_log_level, DEFAULT_LOG_LEVEL};
use nzpass::AppConfig;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    // Logger goes first so warnings from AppConfig::load reach stderr.
    // RUST_LOG wins over LOG_LEVEL when both are set
    let log_level = env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| parse_log_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .format_target(true)
        .init();

    let config = AppConfig::load();

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match handlers::run(&args, &config, &mut out) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            process::exit(2);
        }
    }
}
