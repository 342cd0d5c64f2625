//! Per-level naming rules for the data logger output tree.
//!
//! The logger writes `<yy-mm-dd>/<HH_MM_SS>/<yymmdd-HHMMSS>...`, one directory
//! per day, one per recording session, and the data files inside. Each level
//! is described by one [`LevelRule`] so the name pattern and the timestamp
//! format that parses its match always travel together.
//! Update these when the logger's naming scheme changes.

use crate::error::{LogcopyError, Result};
use chrono::format::{self, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;

// ═══════════════════════════════════════════════════════════════════════════════
// Default Level Patterns
// ═══════════════════════════════════════════════════════════════════════════════

pub const DATE_DIR_PATTERN: &str = r"^\d{2}-\d{2}-\d{2}";
pub const DATE_DIR_FORMAT: &str = "%y-%m-%d";

pub const TIME_DIR_PATTERN: &str = r"^\d{2}_\d{2}_\d{2}";
pub const TIME_DIR_FORMAT: &str = "%H_%M_%S";

pub const DATA_FILE_PATTERN: &str = r"^\d{6}-\d{6}";
pub const DATA_FILE_FORMAT: &str = "%y%m%d-%H%M%S";

/// The three levels scanned below the target root, outermost first.
pub static DEFAULT_RULES: Lazy<Vec<LevelRule>> = Lazy::new(|| {
    vec![
        LevelRule::new(DATE_DIR_PATTERN, DATE_DIR_FORMAT, EntryKind::Directory).unwrap(),
        LevelRule::new(TIME_DIR_PATTERN, TIME_DIR_FORMAT, EntryKind::Directory).unwrap(),
        LevelRule::new(DATA_FILE_PATTERN, DATA_FILE_FORMAT, EntryKind::File).unwrap(),
    ]
});

/// `%y` values from here up belong to the 1900s (`69` is 1969).
const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// Returns an owned copy of the default rules.
pub fn default_rules() -> Vec<LevelRule> {
    DEFAULT_RULES.clone()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════════════════════════

/// Why a matched name did not yield a timestamp.
#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    #[error("second must be in 0..59")]
    LeapSecond,
}

/// Filesystem kind an entry must have to be considered at a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Checks the kind of `path`, following symlinks.
    pub fn matches(self, path: &Path) -> bool {
        match self {
            EntryKind::Directory => path.is_dir(),
            EntryKind::File => path.is_file(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// Naming rule for one level of the tree.
#[derive(Debug, Clone)]
pub struct LevelRule {
    pattern: Regex,
    format: String,
    kind: EntryKind,
}

impl LevelRule {
    /// Builds a rule. The pattern is always anchored at the start of the name,
    /// whether or not it begins with `^`.
    pub fn new(pattern: &str, format: &str, kind: EntryKind) -> Result<Self> {
        let anchored = format!("^(?:{})", pattern);
        let pattern = Regex::new(&anchored).map_err(|source| LogcopyError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern,
            format: format.to_string(),
            kind,
        })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns the prefix of `name` matched by the level pattern.
    pub fn match_prefix<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.pattern.find(name).map(|m| m.as_str())
    }

    /// Parses a timestamp from text previously returned by [`match_prefix`].
    ///
    /// Formats may cover only part of a timestamp. Missing date fields fall
    /// back to 1900-01-01 and missing time fields to midnight, so a time-only
    /// level still yields a comparable value.
    ///
    /// Two-digit years `69..=99` map to the 1900s and `00..=68` to the 2000s.
    /// A seconds value of 60 is rejected rather than read as a leap second.
    ///
    /// [`match_prefix`]: LevelRule::match_prefix
    pub fn parse_timestamp(
        &self,
        text: &str,
    ) -> std::result::Result<NaiveDateTime, TimestampError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, StrftimeItems::new(&self.format))?;

        let date = match parsed.to_naive_date() {
            Ok(date) => self.pivot_two_digit_year(date),
            Err(err) if err.kind() == ParseErrorKind::NotEnough => default_date(),
            Err(err) => return Err(err.into()),
        };
        let time = match parsed.to_naive_time() {
            Ok(time) => time,
            Err(err) if err.kind() == ParseErrorKind::NotEnough => NaiveTime::default(),
            Err(err) => return Err(err.into()),
        };
        if time.nanosecond() >= 1_000_000_000 {
            return Err(TimestampError::LeapSecond);
        }

        Ok(date.and_time(time))
    }

    /// chrono reads `%y` = 69 as 2069; move that year back a century.
    fn pivot_two_digit_year(&self, date: NaiveDate) -> NaiveDate {
        if !self.format.contains("%y") || date.year() != 2000 + TWO_DIGIT_YEAR_PIVOT {
            return date;
        }
        date.with_year(1900 + TWO_DIGIT_YEAR_PIVOT).unwrap_or(date)
    }
}

fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}
