//! One poll cycle: resolve the newest file and copy it if it is new.
//!
//! The last-seen timestamp lives in a [`PollState`] value that the caller
//! passes into [`run_cycle`] and gets back, so nothing here holds global state.

use crate::config::WatchConfig;
use crate::error::{LogcopyError, Result};
use crate::resolver::{resolve_latest, ResolveOutcome};
use chrono::NaiveDateTime;
use filetime::FileTime;
use fs_err as fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// State carried from one cycle to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollState {
    last_seen: Option<NaiveDateTime>,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_seen(&self) -> Option<NaiveDateTime> {
        self.last_seen
    }

    /// Only a strictly newer timestamp counts; an equal one was already copied.
    pub fn is_newer(&self, timestamp: NaiveDateTime) -> bool {
        self.last_seen.map_or(true, |seen| timestamp > seen)
    }

    fn record(self, timestamp: NaiveDateTime) -> Self {
        Self {
            last_seen: Some(timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        timestamp: NaiveDateTime,
    },
    /// Resolved, but not newer than what was last copied.
    Unchanged {
        source: PathBuf,
        timestamp: NaiveDateTime,
    },
    NoMatch {
        level: usize,
        searched: PathBuf,
    },
}

/// Runs one resolve-and-maybe-copy step.
///
/// The returned state differs from `state` only after a successful copy.
pub fn run_cycle(state: PollState, config: &WatchConfig) -> Result<(PollState, CycleOutcome)> {
    let resolution = match resolve_latest(config.target_root(), config.rules())? {
        ResolveOutcome::Found(resolution) => resolution,
        ResolveOutcome::Missing { level, searched } => {
            return Ok((state, CycleOutcome::NoMatch { level, searched }));
        }
    };

    let timestamp = resolution.latest_timestamp;
    if !state.is_newer(timestamp) {
        debug!(path = %resolution.final_path.display(), %timestamp, "Latest entry already copied");
        return Ok((
            state,
            CycleOutcome::Unchanged {
                source: resolution.final_path,
                timestamp,
            },
        ));
    }

    let destination = config.destination_path();
    let bytes = copy_preserving(&resolution.final_path, &destination)?;
    info!(
        from = %resolution.final_path.display(),
        to = %destination.display(),
        bytes,
        %timestamp,
        "Copied newer entry"
    );

    Ok((
        state.record(timestamp),
        CycleOutcome::Copied {
            source: resolution.final_path,
            destination,
            timestamp,
        },
    ))
}

/// Copies `from` over `to`, keeping permissions and access/modification times.
pub fn copy_preserving(from: &Path, to: &Path) -> Result<u64> {
    let copy_err = |source: std::io::Error| LogcopyError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let bytes = fs::copy(from, to).map_err(copy_err)?;
    let metadata = fs::metadata(from).map_err(copy_err)?;
    filetime::set_file_times(
        to,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
    .map_err(copy_err)?;

    Ok(bytes)
}
