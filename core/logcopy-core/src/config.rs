//! Watch configuration.
//!
//! Production code builds a `WatchConfig` from the command line with the
//! default level rules. Tests swap in their own rules with
//! [`WatchConfig::with_rules`].

use crate::error::{LogcopyError, Result};
use crate::rules::{default_rules, LevelRule};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_INTERVAL_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Root of the logger output tree.
    target_root: PathBuf,
    /// Directory the newest file is copied into.
    destination_dir: PathBuf,
    file_name: String,
    interval: Duration,
    rules: Vec<LevelRule>,
}

impl WatchConfig {
    pub fn new(target_root: PathBuf, destination_dir: PathBuf, file_name: String) -> Self {
        Self {
            target_root,
            destination_dir,
            file_name,
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            rules: default_rules(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_rules(mut self, rules: Vec<LevelRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    /// Full path of the file that gets overwritten on each copy.
    pub fn destination_path(&self) -> PathBuf {
        self.destination_dir.join(&self.file_name)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn rules(&self) -> &[LevelRule] {
        &self.rules
    }

    /// Checks once, at startup, that the destination directory is usable.
    pub fn validate_destination(&self) -> Result<()> {
        if !self.destination_dir.exists() {
            return Err(LogcopyError::DestinationMissing(self.destination_dir.clone()));
        }
        if !self.destination_dir.is_dir() {
            return Err(LogcopyError::DestinationNotDirectory(
                self.destination_dir.clone(),
            ));
        }
        Ok(())
    }
}
