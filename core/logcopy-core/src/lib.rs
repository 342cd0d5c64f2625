//! # logcopy-core
//!
//! Core library for the data logger watcher: finds the newest file in a
//! `date/time/file` tree and copies it to a fixed destination.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime. One cycle runs to completion before the next.
//! - **No globals**: The last-seen timestamp is a [`PollState`] value threaded
//!   through [`run_cycle`].
//! - **No match is not an error**: An empty or missing level is an outcome the
//!   caller retries on the next poll. Only configuration bugs and copy failures
//!   are errors.
//! - **No process exits**: Only the binary decides the exit status.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use logcopy_core::{run_cycle, PollState, WatchConfig};
//!
//! let config = WatchConfig::new(root, dest_dir, "latest.csv".into());
//! config.validate_destination()?;
//! let (state, outcome) = run_cycle(PollState::new(), &config)?;
//! ```

pub mod config;
pub mod error;
pub mod messages;
pub mod poll;
pub mod resolver;
pub mod rules;

pub use config::{WatchConfig, DEFAULT_INTERVAL_SECS};
pub use error::{LogcopyError, Result};
pub use messages::{Catalog, Locale, TextKey};
pub use poll::{copy_preserving, run_cycle, CycleOutcome, PollState};
pub use resolver::{detect_level, resolve_latest, Candidate, Resolution, ResolveOutcome};
pub use rules::{default_rules, EntryKind, LevelRule, TimestampError, DEFAULT_RULES};
