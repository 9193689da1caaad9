use rusqlite::Connection;
use std::path::Path;

use crate::{
    config::{SALES_COLUMNS, SALES_TABLE},
    error::{LoaderError, ScriptKind},
    util::read_text_file,
};

/// Creates the `sales` table by running the schema script
///
/// The script is expected to replace pre-existing objects, so that it can be applied to the same
/// db over and over again.
pub(crate) fn apply_schema(conn: &Connection, schema_path: &Path) -> Result<(), LoaderError> {
    info!("reading schema from {schema_path:?}");
    execute_script(conn, schema_path, ScriptKind::Schema)?;

    let found = count_table_columns(conn, SALES_TABLE)?;
    if found != SALES_COLUMNS.len() {
        return Err(LoaderError::TableShape {
            table: SALES_TABLE,
            expected: SALES_COLUMNS.len(),
            found,
        });
    }

    Ok(())
}

/// (Re-)creates the cleaning view by running the view script
pub(crate) fn apply_view(conn: &Connection, view_path: &Path) -> Result<(), LoaderError> {
    info!("creating cleaning view from {view_path:?}");
    execute_script(conn, view_path, ScriptKind::View)
}

fn execute_script(conn: &Connection, path: &Path, kind: ScriptKind) -> Result<(), LoaderError> {
    let script = read_text_file(path).map_err(|source| LoaderError::ScriptRead {
        kind,
        path: path.to_owned(),
        source,
    })?;
    trace!("executing the following {kind} script:\n{script}");

    conn.execute_batch(&script)
        .map_err(|source| LoaderError::ScriptExecution {
            kind,
            path: path.to_owned(),
            source,
        })
}

/// Counts the columns of a given table, zero if the table does not exist
fn count_table_columns(conn: &Connection, table_name: &str) -> Result<usize, LoaderError> {
    let mut columns = Vec::new();

    conn.pragma(None, "table_info", table_name, |row| {
        let name: String = row.get(1)?;
        let r#type: String = row.get(2)?;
        columns.push((name, r#type));
        Ok(())
    })?;

    trace!(
        "found the following {table_name} table columns, in total {}:\n{columns:#?}",
        columns.len()
    );

    Ok(columns.len())
}
