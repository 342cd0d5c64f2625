//! User-facing message catalog.
//!
//! Every console string goes through [`Catalog`], keyed by [`TextKey`]. The
//! locale is chosen once at startup; Japanese is the default because the
//! watcher runs on the logger operators' machines.

use crate::error::LogcopyError;
use std::env;
use std::path::Path;

pub const LANG_ENV: &str = "LOGCOPY_LANG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja_jp" | "jp" => Some(Locale::Ja),
            "en" | "en_us" | "en_gb" => Some(Locale::En),
            _ => None,
        }
    }

    /// Reads `LOGCOPY_LANG`, falling back to Japanese.
    pub fn from_env() -> Self {
        env::var(LANG_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    // Help screen
    About,
    UsageHeading,
    PositionalHeading,
    OptionsHeading,
    TargetPathHelp,
    DestPathHelp,
    FileNameHelp,
    IntervalHelp,
    DefaultLabel,
    DebugHelp,
    HelpHelp,
    VersionHelp,

    // Argument errors
    ErrorLabel,
    MissingArguments,
    InvalidValue,
    UnknownArgument,
    InvalidArguments,

    // Watch loop
    Title,
    WatchStarted,
    StopHint,
    NewDataFound,
    NoNewData,

    // Fatal errors
    DestinationMissing,
    DestinationNotDirectory,
    PatternFormatMismatch,
    CopyFailed,
    InvalidPattern,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        match self.locale {
            Locale::Ja => ja(key),
            Locale::En => en(key),
        }
    }

    /// Status line printed when a newer file has been copied.
    pub fn new_data_found(&self, path: &Path) -> String {
        format!("{} {}", self.text(TextKey::NewDataFound), path.display())
    }

    /// `<program>: <error label> <detail>`, the shape of every fatal line.
    pub fn error_line(&self, program: &str, detail: &str) -> String {
        format!("{}: {} {}", program, self.text(TextKey::ErrorLabel), detail)
    }

    /// Localized description of a fatal error.
    pub fn describe(&self, err: &LogcopyError) -> String {
        match err {
            LogcopyError::DestinationMissing(path) => {
                format!("{} {}", self.text(TextKey::DestinationMissing), path.display())
            }
            LogcopyError::DestinationNotDirectory(path) => format!(
                "{} {}",
                self.text(TextKey::DestinationNotDirectory),
                path.display()
            ),
            LogcopyError::InvalidPattern { pattern, .. } => {
                format!("{} {}", self.text(TextKey::InvalidPattern), pattern)
            }
            LogcopyError::TimestampMismatch {
                path,
                matched,
                format,
                ..
            } => format!(
                "{} {} ({:?} / {:?})",
                self.text(TextKey::PatternFormatMismatch),
                path.display(),
                matched,
                format
            ),
            LogcopyError::Copy { from, to, source } => format!(
                "{} {} -> {} ({})",
                self.text(TextKey::CopyFailed),
                from.display(),
                to.display(),
                source
            ),
        }
    }
}

fn ja(key: TextKey) -> &'static str {
    match key {
        TextKey::About => "データロガーの最新CSVファイル自動コピーツール",
        TextKey::UsageHeading => "使い方:",
        TextKey::PositionalHeading => "指定位置引数（必須）:",
        TextKey::OptionsHeading => "オプション引数:",
        TextKey::TargetPathHelp => "監視対象のディレクトリ",
        TextKey::DestPathHelp => "出力対象のディレクトリ",
        TextKey::FileNameHelp => "出力ファイル名",
        TextKey::IntervalHelp => "データ探索間隔(秒)",
        TextKey::DefaultLabel => "デフォルト:",
        TextKey::DebugHelp => "デバッグモード",
        TextKey::HelpHelp => "このヘルプ画面を出して終了します",
        TextKey::VersionHelp => "バージョンを表示して終了します",
        TextKey::ErrorLabel => "エラー:",
        TextKey::MissingArguments => "以下の引数が必要です:",
        TextKey::InvalidValue => "引数の値が不正です:",
        TextKey::UnknownArgument => "不明な引数です:",
        TextKey::InvalidArguments => "引数が不正です",
        TextKey::Title => "データロガーの最新CSVファイル自動コピーツール",
        TextKey::WatchStarted => "監視を開始します.....",
        TextKey::StopHint => "終了するには Ctrl-C を入力してください",
        TextKey::NewDataFound => "● 新しいデータを発見しました：",
        TextKey::NoNewData => "新しいデータは見つかりませんでした",
        TextKey::DestinationMissing => "出力対象パスが存在しません:",
        TextKey::DestinationNotDirectory => "出力対象パスがフォルダではありません:",
        TextKey::PatternFormatMismatch => "命名規則と日時フォーマットが一致しません:",
        TextKey::CopyFailed => "ファイルのコピーに失敗しました:",
        TextKey::InvalidPattern => "命名規則の正規表現が不正です:",
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::About => "Copies the newest data logger CSV file to a fixed path",
        TextKey::UsageHeading => "Usage:",
        TextKey::PositionalHeading => "Arguments (required):",
        TextKey::OptionsHeading => "Options:",
        TextKey::TargetPathHelp => "Directory to watch",
        TextKey::DestPathHelp => "Directory to copy into",
        TextKey::FileNameHelp => "Output file name",
        TextKey::IntervalHelp => "Polling interval in seconds",
        TextKey::DefaultLabel => "default:",
        TextKey::DebugHelp => "Debug mode",
        TextKey::HelpHelp => "Print this help and exit",
        TextKey::VersionHelp => "Print version and exit",
        TextKey::ErrorLabel => "error:",
        TextKey::MissingArguments => "the following arguments are required:",
        TextKey::InvalidValue => "invalid value:",
        TextKey::UnknownArgument => "unexpected argument:",
        TextKey::InvalidArguments => "invalid arguments",
        TextKey::Title => "Data logger latest CSV auto-copy",
        TextKey::WatchStarted => "Watching.....",
        TextKey::StopHint => "Press Ctrl-C to stop",
        TextKey::NewDataFound => "● New data found:",
        TextKey::NoNewData => "No new data found",
        TextKey::DestinationMissing => "Destination path does not exist:",
        TextKey::DestinationNotDirectory => "Destination path is not a directory:",
        TextKey::PatternFormatMismatch => "Name pattern and timestamp format disagree:",
        TextKey::CopyFailed => "Copy failed:",
        TextKey::InvalidPattern => "Invalid name pattern:",
    }
}
