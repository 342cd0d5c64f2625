//! Command line parsing with localized help and errors.
//!
//! The derive gives the argument shape. Help strings, headings and error
//! lines are filled in from the [`Catalog`] after the locale is chosen.

use clap::error::{ContextKind, ErrorKind};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use logcopy_core::{Catalog, TextKey, WatchConfig, DEFAULT_INTERVAL_SECS};
use std::path::PathBuf;
use std::time::Duration;

pub const PROGRAM: &str = "logcopy";
const USAGE: &str = "logcopy TARGET_PATH DEST_PATH FILE_NAME [--interval 3] [--debug] [--help]";

#[derive(Parser, Debug)]
#[command(name = PROGRAM, version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(value_name = "TARGET_PATH")]
    pub target_path: PathBuf,

    #[arg(value_name = "DEST_PATH")]
    pub dest_path: PathBuf,

    #[arg(value_name = "FILE_NAME")]
    pub file_name: String,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_INTERVAL_SECS,
        hide_default_value = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    #[arg(short, long)]
    pub debug: bool,

    #[allow(dead_code)]
    #[arg(short = 'h', long, action = ArgAction::Help)]
    help: Option<bool>,

    #[allow(dead_code)]
    #[arg(short = 'V', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    pub fn to_config(&self) -> WatchConfig {
        WatchConfig::new(
            self.target_path.clone(),
            self.dest_path.clone(),
            self.file_name.clone(),
        )
        .with_interval(Duration::from_secs(self.interval))
    }
}

/// Builds the clap command with every user-visible string taken from `catalog`.
pub fn command(catalog: Catalog) -> clap::Command {
    let template = format!(
        "{{about-with-newline}}\n{} {{usage}}\n\n{}\n{{positionals}}\n\n{}\n{{options}}\n",
        catalog.text(TextKey::UsageHeading),
        catalog.text(TextKey::PositionalHeading),
        catalog.text(TextKey::OptionsHeading),
    );
    let interval_help = format!(
        "{} [{} {}]",
        catalog.text(TextKey::IntervalHelp),
        catalog.text(TextKey::DefaultLabel),
        DEFAULT_INTERVAL_SECS
    );

    Cli::command()
        .about(catalog.text(TextKey::About))
        .override_usage(USAGE)
        .help_template(template)
        .mut_arg("target_path", |a| a.help(catalog.text(TextKey::TargetPathHelp)))
        .mut_arg("dest_path", |a| a.help(catalog.text(TextKey::DestPathHelp)))
        .mut_arg("file_name", |a| a.help(catalog.text(TextKey::FileNameHelp)))
        .mut_arg("interval", |a| a.help(interval_help))
        .mut_arg("debug", |a| a.help(catalog.text(TextKey::DebugHelp)))
        .mut_arg("help", |a| a.help(catalog.text(TextKey::HelpHelp)))
        .mut_arg("version", |a| a.help(catalog.text(TextKey::VersionHelp)))
}

pub fn parse_from<I, T>(catalog: Catalog, args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command(catalog).try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// True for the help/version "errors" that clap uses to stop parsing.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Usage line followed by `<program>: <error label> <detail>`.
pub fn localize_error(err: &clap::Error, catalog: Catalog) -> String {
    let invalid_arg = err.get(ContextKind::InvalidArg).map(|v| v.to_string());

    let detail = match (err.kind(), invalid_arg) {
        (ErrorKind::MissingRequiredArgument, Some(args)) => {
            format!("{} {}", catalog.text(TextKey::MissingArguments), args)
        }
        (ErrorKind::InvalidValue | ErrorKind::ValueValidation, Some(arg)) => {
            let value = err
                .get(ContextKind::InvalidValue)
                .map(|v| v.to_string())
                .unwrap_or_default();
            format!("{} {} {}", catalog.text(TextKey::InvalidValue), arg, value)
        }
        (ErrorKind::UnknownArgument, Some(arg)) => {
            format!("{} {}", catalog.text(TextKey::UnknownArgument), arg)
        }
        _ => catalog.text(TextKey::InvalidArguments).to_string(),
    };

    format!(
        "{} {}\n{}",
        catalog.text(TextKey::UsageHeading),
        USAGE,
        catalog.error_line(PROGRAM, &detail)
    )
}
