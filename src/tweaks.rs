use rusqlite::Connection;

/// Apply tweaks to the SQLite database that we expect to be better w/r/t performance
///
/// Must be called before the import transaction is opened, some pragmas are no-ops inside of a
/// transaction.
///
/// journal_mode = WAL significantly slows down our bulk-inserts
/// temp_store = MEMORY has no significant impact on performance
pub(crate) fn before_bulk_insert(conn: &mut Connection) -> rusqlite::Result<()> {
    let page_size = 4096;
    let cache_size = -(2i64.pow(17)); // negative values are in KiB => 128 MiB

    info!("applying performance tweaks");
    conn.pragma_update(None, "cache_size", cache_size)?; // non-persistent
    conn.pragma_update(None, "page_size", page_size)?;
    conn.pragma_update(None, "synchronous", "OFF")?;

    Ok(())
}

/// Undo [`before_bulk_insert`] and refresh the query planner statistics
pub(crate) fn after_bulk_insert(conn: &mut Connection, vacuum: bool) -> rusqlite::Result<()> {
    info!("resetting performance tweaks");
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    for op in if vacuum {
        &["VACUUM", "ANALYZE"][..]
    } else {
        &["ANALYZE"][..]
    } {
        let now = std::time::Instant::now();
        info!("executing {op:?} in db");
        conn.execute_batch(op)?;
        info!("that took {:?}", now.elapsed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synchronous(conn: &Connection) -> i64 {
        conn.pragma_query_value(None, "synchronous", |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn synchronous_is_restored() {
        let dir = tempfile::tempdir().unwrap();
        let mut conn = Connection::open(dir.path().join("tweaks.db")).unwrap();

        before_bulk_insert(&mut conn).unwrap();
        assert_eq!(synchronous(&conn), 0); // OFF

        after_bulk_insert(&mut conn, true).unwrap();
        assert_eq!(synchronous(&conn), 1); // NORMAL
    }
}
