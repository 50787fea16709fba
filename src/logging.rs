use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

pub fn init_logging(log_path: &Path) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(log_path) {
        let _ = WriteLogger::init(level, Config::default(), log_file);
    }
}
