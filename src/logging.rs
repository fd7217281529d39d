//! File logging for the terminal runner.
//!
//! The game owns the terminal, so log records go to a file through `log4rs`.
//! Without a log file no logger is installed and `log` macros are no-ops.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} {m}{n}";

/// Build a config that appends records at or above `level` to `path`.
pub fn file_config(path: &Path, level: LevelFilter) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("build log config")
}

/// Install the file logger as the global `log` backend.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let config = file_config(path, level)?;
    log4rs::init_config(config).context("install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_creates_log_file() {
        let path = std::env::temp_dir().join(format!("blockfall-log-{}.log", std::process::id()));
        let config = file_config(&path, LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
