//! Errors which can abort a load
use std::{fmt, path::PathBuf};

/// Which of the two SQL scripts an error originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScriptKind {
    Schema,
    View,
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptKind::Schema => f.write_str("schema"),
            ScriptKind::View => f.write_str("view"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoaderError {
    #[error("data source {0:?} does not exist")]
    MissingFile(PathBuf),

    #[error("could not read {kind} script {path:?}")]
    ScriptRead {
        kind: ScriptKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to execute {kind} script {path:?}")]
    ScriptExecution {
        kind: ScriptKind,
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("expected table {table:?} with {expected} columns after applying the schema, found {found}")]
    TableShape {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("CSV header lacks the required column {0:?}")]
    MissingColumn(&'static str),

    #[error("row {row}: cannot coerce {column} value {value:?} to {target}")]
    ParseCoercion {
        row: usize,
        column: &'static str,
        value: String,
        target: &'static str,
    },

    #[error("malformed CSV data")]
    Csv(#[from] csv::Error),

    #[error("database operation failed")]
    Store(#[from] rusqlite::Error),
}

impl LoaderError {
    /// A hint on how to fix the most common causes of failure
    pub(crate) fn suggestion(&self) -> Option<String> {
        match self {
            LoaderError::MissingFile(path) => Some(format!(
                "ensure {path:?} exists, or pass another file via -c/--csv"
            )),
            LoaderError::MissingColumn(_) => Some(format!(
                "the CSV header must contain all of {}",
                crate::config::SALES_COLUMNS.join(", ")
            )),
            LoaderError::TableShape { table, .. } => Some(format!(
                "does the schema script create the {table:?} table with positional columns?"
            )),
            _ => None,
        }
    }
}
