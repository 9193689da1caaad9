//! This tool provisions a SQLite database for analysing online retail sales
//!
//! It does so by running a schema script, bulk-loading the raw sales CSV export into the `sales`
//! table and creating a cleaning view on top of it. Schema and cleaning logic are kept in external
//! SQL scripts, this tool only glues them together with the data.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]

use clap::Parser;
use color_eyre::Section;
use eyre::Result;

use crate::loader::Loader;

#[macro_use]
extern crate log;

mod cli;
mod config;
mod error;
mod import;
mod loader;
mod record;
mod script;
mod tweaks;
mod util;

fn main() -> Result<()> {
    // parse the CLI arguments
    let args = cli::Cli::parse();

    // intialize logger
    let rust_log_var = "RUST_LOG";
    if std::env::var(rust_log_var).is_err() && args.verbose != 0 {
        let level = match args.verbose {
            1 => "debug",
            _ => "trace",
        };
        std::env::set_var(rust_log_var, level);
    }
    colog::init();
    color_eyre::install()?;

    trace!("parsed args");

    let loader = Loader::new(args.into());
    match loader.run() {
        Ok(_) => {
            info!("database setup complete, you can now run the analysis script");
            Ok(())
        }
        Err(e) => {
            error!("an error occurred: {e}");
            let suggestion = e.suggestion();
            let report = eyre::Report::new(e);
            Err(match suggestion {
                Some(s) => report.suggestion(s),
                None => report,
            })
        }
    }
}
