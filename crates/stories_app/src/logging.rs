//! Logging initialization for stories_app.
//!
//! The terminal is owned by the interactive search loop, so logs go to
//! `./stories.log` instead of stdout.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{CombinedLogger, ConfigBuilder, WriteLogger};

/// Initialize a file logger at `./stories.log`.
///
/// If the log file cannot be created the app runs unlogged; a missing log
/// file must never keep the client from starting.
pub fn initialize() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let log_path = PathBuf::from("./stories.log");
    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
            return;
        }
    };

    let _ = CombinedLogger::init(vec![WriteLogger::new(LevelFilter::Info, config, file)]);
}
