//! Command Line Interface (CLI) of this software
use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    LoaderConfig, DEFAULT_CSV_FILE, DEFAULT_DB_FILE, DEFAULT_SCHEMA_FILE, DEFAULT_VIEW_FILE,
};

/// Build a SQLite db from the online retail sales CSV
///
/// Creates the `sales` table from the schema script, imports all records from the CSV file and
/// (re-)creates the cleaning view. This operation is atomic, i.e. if any error is found while
/// loading, the db remains unchanged. Running it again replaces all previously loaded data.
#[derive(Parser)]
#[command(version, about, long_about)]
pub(crate) struct Cli {
    /// Increase verbosity (i.e. debug or trace level logging)
    ///
    /// Repeat to increase the verbosity further
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// SQLite db to operate on
    ///
    /// Creates a new file on demand
    #[arg(default_value = DEFAULT_DB_FILE)]
    pub db_file: PathBuf,

    /// CSV file to import the sales records from
    #[arg(short, long, default_value = DEFAULT_CSV_FILE)]
    pub csv: PathBuf,

    /// SQL script creating the sales table
    #[arg(short, long, default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,

    /// SQL script creating the cleaning view
    #[arg(short = 'w', long, default_value = DEFAULT_VIEW_FILE)]
    pub view: PathBuf,

    /// Run vacuum after the import
    ///
    /// This makes the load slower and is not required, however it can reduce the on-disk size
    /// of a db which was loaded many times over.
    #[arg(long, action)]
    pub vacuum: bool,
}

impl From<Cli> for LoaderConfig {
    fn from(value: Cli) -> Self {
        let Cli {
            verbose: _,
            db_file,
            csv,
            schema,
            view,
            vacuum,
        } = value;

        Self {
            db_file,
            csv_path: csv,
            schema_path: schema,
            view_path: view,
            vacuum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_default_config() {
        let cli = Cli::try_parse_from(["retail-sales-db"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(LoaderConfig::from(cli), LoaderConfig::default());
    }

    #[test]
    fn all_options() {
        let cli = Cli::try_parse_from([
            "retail-sales-db",
            "-vv",
            "--vacuum",
            "-c",
            "data.csv",
            "--schema",
            "schema.sql",
            "-w",
            "view.sql",
            "out.db",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let config = LoaderConfig::from(cli);
        assert_eq!(config.db_file, PathBuf::from("out.db"));
        assert_eq!(config.csv_path, PathBuf::from("data.csv"));
        assert_eq!(config.schema_path, PathBuf::from("schema.sql"));
        assert_eq!(config.view_path, PathBuf::from("view.sql"));
        assert!(config.vacuum);
    }

    #[test]
    fn cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
