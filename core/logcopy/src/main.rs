//! logcopy: copies the newest data logger file to a fixed path.
//!
//! Watches a `yy-mm-dd/HH_MM_SS/yymmdd-HHMMSS...` tree and, whenever a file
//! with a newer timestamp shows up, copies it over `DEST_PATH/FILE_NAME`.
//!
//! ## Usage
//!
//! ```bash
//! logcopy /mnt/logger /srv/share latest.csv --interval 3
//! ```
//!
//! ## Exit status
//!
//! - `1`: invalid destination at startup, or a fatal error while watching
//! - `2`: invalid arguments

mod cli;
mod logging;
mod watch;

use logcopy_core::{Catalog, Locale};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let catalog = Catalog::new(Locale::from_env());

    let args = match cli::parse_from(catalog, std::env::args_os()) {
        Ok(args) => args,
        Err(err) if cli::is_informational(&err) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", cli::localize_error(&err, catalog));
            return ExitCode::from(2);
        }
    };

    logging::init(args.debug);
    tracing::debug!(?args, "Parsed arguments");

    let config = args.to_config();
    if let Err(err) = config.validate_destination() {
        eprintln!("{}", catalog.error_line(cli::PROGRAM, &catalog.describe(&err)));
        return ExitCode::FAILURE;
    }

    watch::print_banner(catalog);

    match watch::run(&config, catalog) {
        Ok(never) => match never {},
        Err(err) => {
            error!(error = %err, "Watch loop stopped");
            eprintln!("{}", catalog.error_line(cli::PROGRAM, &catalog.describe(&err)));
            ExitCode::FAILURE
        }
    }
}
