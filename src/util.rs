use std::path::Path;

/// Reads a whole text file, e.g. a SQL script
///
/// Measures time taken to read
pub(crate) fn read_text_file(file: &Path) -> Result<String, std::io::Error> {
    let now = std::time::Instant::now();

    trace!("reading {file:?}");
    let content = std::fs::read_to_string(file)?;

    debug!("reading {file:?} took {:?}", now.elapsed());
    Ok(content)
}

/// Escapes string in the way prescribed by the SQL standard, but generic over the quotation symbol
/// in use
pub(crate) fn escape_sql<const DELIM: char, S: AsRef<str>>(str_to_escape: S) -> String {
    let escaped = str_to_escape
        .as_ref()
        .replace(DELIM, String::from_iter([DELIM, DELIM]).as_str());
    format!("{DELIM}{escaped}{DELIM}")
}

/// Escape a string to be used as SQLite identifier
///
/// The SQL Standard requires double quotes around identifiers (see
/// <https://sqlite.org/lang_keywords.html>).
pub(crate) fn escape_sql_ident<S: AsRef<str>>(str_to_escape: S) -> String {
    escape_sql::<'"', S>(str_to_escape)
}

/// If enough time passed, create a status report
#[macro_export]
macro_rules! maybe_time_report {
    ($row_kind:expr, $timer:expr, $duration_since_last_update:expr, $rows_inserted:expr) => {
        if $timer.elapsed() > $duration_since_last_update && $rows_inserted != 0 {
            let elapsed_since_start = $timer.elapsed();
            info!(
                "inserted {rows_inserted} {row_kind}s over {total_time_passed:?}, averaging {time_per_insertion:?}/{row_kind} ↔ {insertions_per_second:.0} {row_kind}s/s",
                row_kind = $row_kind,
                rows_inserted = $rows_inserted,
                total_time_passed = elapsed_since_start,
                time_per_insertion = elapsed_since_start.div_f64($rows_inserted as f64),
                insertions_per_second = $rows_inserted as f64 / elapsed_since_start.as_secs_f64()
            );
            $duration_since_last_update += $crate::config::TIME_BETWEEN_STATUS_REPORTS;
        }
    };

    ($row_kind:expr, $timer:expr, $rows_inserted:expr) => {
        if $rows_inserted != 0 {
            let elapsed_since_start = $timer.elapsed();
            debug!(
                "inserted {rows_inserted} {row_kind}s over {total_time_passed:?}, averaging {time_per_insertion:?}/{row_kind} ↔ {insertions_per_second:.0} {row_kind}s/s",
                row_kind = $row_kind,
                rows_inserted = $rows_inserted,
                total_time_passed = elapsed_since_start,
                time_per_insertion = elapsed_since_start.div_f64($rows_inserted as f64),
                insertions_per_second = $rows_inserted as f64 / elapsed_since_start.as_secs_f64()
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_identifiers() {
        assert_eq!(escape_sql_ident("sales"), r#""sales""#);
        assert_eq!(escape_sql_ident(r#"we"ird"#), r#""we""ird""#);
    }

    #[test]
    fn reads_text_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut f, b"SELECT 1;").unwrap();

        assert_eq!(read_text_file(f.path()).unwrap(), "SELECT 1;");
    }
}
