//! The fixed-interval poll loop.
//!
//! Cycles never overlap: each one runs to completion, then the loop sleeps.
//! Filesystem calls have no timeout, so a hung network mount stalls the loop
//! until it recovers or the process is killed.

use logcopy_core::{
    run_cycle, Catalog, CycleOutcome, LogcopyError, PollState, TextKey, WatchConfig,
};
use std::convert::Infallible;
use std::thread;
use tracing::debug;

pub fn print_banner(catalog: Catalog) {
    println!();
    println!("/*--------------------------------------------.");
    println!("  {}", catalog.text(TextKey::Title));
    println!("  {} {}", crate::cli::PROGRAM, env!("CARGO_PKG_VERSION"));
    println!("`---------------------------------------------*/");
    println!();
    println!("{}", catalog.text(TextKey::WatchStarted));
    println!("{}", catalog.text(TextKey::StopHint));
    println!();
}

/// Polls until a fatal error. Only returns with that error.
pub fn run(config: &WatchConfig, catalog: Catalog) -> Result<Infallible, LogcopyError> {
    let mut state = PollState::new();
    debug!(
        root = %config.target_root().display(),
        destination = %config.destination_path().display(),
        interval_secs = config.interval().as_secs(),
        "Watch loop started"
    );

    loop {
        let (next, outcome) = run_cycle(state, config)?;
        state = next;
        report(&outcome, catalog);
        thread::sleep(config.interval());
    }
}

fn report(outcome: &CycleOutcome, catalog: Catalog) {
    match outcome {
        CycleOutcome::Copied { source, .. } => {
            println!("{}", catalog.new_data_found(source));
        }
        CycleOutcome::Unchanged { source, timestamp } => {
            debug!(path = %source.display(), %timestamp, "{}", catalog.text(TextKey::NoNewData));
        }
        CycleOutcome::NoMatch { level, searched } => {
            debug!(depth = level, dir = %searched.display(), "{}", catalog.text(TextKey::NoNewData));
        }
    }
}
