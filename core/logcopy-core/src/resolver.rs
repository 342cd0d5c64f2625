//! Latest-entry resolution across the fixed levels of the logger tree.
//!
//! At each level only entries of the expected kind whose name starts with the
//! level pattern are considered. The timestamp parsed from the matched prefix
//! decides the winner, and resolution descends into it.
//!
//! Ties between equal timestamps fall to directory enumeration order, which
//! the filesystem does not define. Callers must not depend on which tied entry
//! wins.
//!
//! Symlinks are followed when checking an entry's kind. A child link that
//! points back at the directory being listed is reported by walkdir as a loop
//! and is skipped, as are broken links. A link to a higher ancestor is
//! followed like any directory; descent stops after the last level, so it
//! cannot recurse.

use crate::error::{LogcopyError, Result};
use crate::rules::LevelRule;
use chrono::NaiveDateTime;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// An entry that passed the kind and name filters at one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub timestamp: NaiveDateTime,
    pub path: PathBuf,
}

/// The chain of winners for a fully resolved tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Winner of each level, outermost first.
    pub levels: Vec<Candidate>,
    pub final_path: PathBuf,
    /// Timestamp of the deepest level's winner.
    pub latest_timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Found(Resolution),
    /// Nothing matched at `level` (0-based) inside `searched`.
    Missing { level: usize, searched: PathBuf },
}

impl ResolveOutcome {
    pub fn found(self) -> Option<Resolution> {
        match self {
            ResolveOutcome::Found(resolution) => Some(resolution),
            ResolveOutcome::Missing { .. } => None,
        }
    }
}

/// Returns the matching children of `dir`, newest first.
///
/// `Ok(None)` means nothing matched, including when `dir` is missing or
/// unreadable. A name that matches the pattern but fails to parse is a
/// [`LogcopyError::TimestampMismatch`].
pub fn detect_level(dir: &Path, rule: &LevelRule) -> Result<Option<Vec<Candidate>>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !rule.kind().matches(path) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(matched) = rule.match_prefix(name) else {
            continue;
        };

        let timestamp = rule
            .parse_timestamp(matched)
            .map_err(|source| LogcopyError::TimestampMismatch {
                path: path.to_path_buf(),
                matched: matched.to_string(),
                format: rule.format().to_string(),
                source,
            })?;

        candidates.push(Candidate {
            name: name.to_string(),
            timestamp,
            path: path.to_path_buf(),
        });
    }

    if candidates.is_empty() {
        return Ok(None);
    }

    candidates.sort_by_key(|c| Reverse(c.timestamp));
    Ok(Some(candidates))
}

/// Walks `rules` from `root` downward, taking the newest match at each level.
pub fn resolve_latest(root: &Path, rules: &[LevelRule]) -> Result<ResolveOutcome> {
    let mut current = root.to_path_buf();
    let mut levels = Vec::with_capacity(rules.len());

    for (level, rule) in rules.iter().enumerate() {
        let Some(winner) = detect_level(&current, rule)?.and_then(|c| c.into_iter().next())
        else {
            debug!(depth = level, dir = %current.display(), kind = %rule.kind(), "No matching entry");
            return Ok(ResolveOutcome::Missing {
                level,
                searched: current,
            });
        };
        debug!(depth = level, name = %winner.name, timestamp = %winner.timestamp, "Level winner");

        current = winner.path.clone();
        levels.push(winner);
    }

    let Some(latest_timestamp) = levels.last().map(|c| c.timestamp) else {
        return Ok(ResolveOutcome::Missing {
            level: 0,
            searched: current,
        });
    };

    Ok(ResolveOutcome::Found(Resolution {
        levels,
        final_path: current,
        latest_timestamp,
    }))
}
