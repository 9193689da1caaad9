use rusqlite::{params, Transaction};

use crate::{
    config::{SALES_COLUMNS, SALES_TABLE, TIME_BETWEEN_STATUS_REPORTS},
    error::LoaderError,
    maybe_time_report,
    record::Record,
    util::escape_sql_ident,
};

/// Inserts all [`Record`]s into the `sales` table
///
/// All rows go through one prepared statement inside of the passed transaction. Nothing is
/// committed here: if any record fails to parse or to insert, the error is returned and the
/// caller drops the transaction, rolling back every row inserted so far.
///
/// Returns the number of rows inserted.
pub(crate) fn bulk_insert(
    db_ta: &Transaction,
    records: impl Iterator<Item = Result<Record, LoaderError>>,
) -> Result<usize, LoaderError> {
    let statement = format!(
        "INSERT INTO {} VALUES ({})",
        escape_sql_ident(SALES_TABLE),
        std::iter::repeat_n("?", SALES_COLUMNS.len())
            .collect::<Vec<_>>()
            .join(", ")
    );
    debug!("prepared the following statement:\n{statement}");
    let mut insert_stmt = db_ta.prepare(&statement)?;

    let records_t0 = std::time::Instant::now();
    let mut report_td = TIME_BETWEEN_STATUS_REPORTS;
    let mut records_inserted = 0;
    for maybe_record in records {
        let record = maybe_record?;

        // sporadically report on timing
        maybe_time_report!("record", records_t0, report_td, records_inserted);

        trace!("inserting row for invoice {:?}", record.invoice_no);
        insert_stmt.execute(params![
            record.invoice_no,
            record.stock_code,
            record.description,
            record.quantity,
            record.invoice_date,
            record.unit_price,
            record.customer_id,
            record.country,
        ])?;
        records_inserted += 1;
    }
    insert_stmt.finalize()?;

    maybe_time_report!("record", records_t0, records_inserted);

    Ok(records_inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn sales_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"CREATE TABLE "sales" (a TEXT, b TEXT, c TEXT, d INTEGER, e TEXT, f REAL, g INTEGER, h TEXT)"#,
        )
        .unwrap();
        conn
    }

    fn record(invoice_no: &str, customer_id: Option<i64>) -> Record {
        Record {
            invoice_no: invoice_no.into(),
            stock_code: "85123A".into(),
            description: "WHITE HANGING HEART T-LIGHT HOLDER".into(),
            quantity: 6,
            invoice_date: "12/1/2010 8:26".into(),
            unit_price: 2.55,
            customer_id,
            country: "United Kingdom".into(),
        }
    }

    fn count_rows(conn: &Connection) -> i64 {
        conn.query_row(r#"SELECT COUNT(*) FROM "sales""#, (), |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn inserts_and_counts() {
        let mut conn = sales_db();

        let db_ta = conn.transaction().unwrap();
        let records = vec![Ok(record("536365", Some(17850))), Ok(record("536366", None))];
        assert_eq!(bulk_insert(&db_ta, records.into_iter()).unwrap(), 2);
        db_ta.commit().unwrap();

        assert_eq!(count_rows(&conn), 2);
        let customer_id: Option<i64> = conn
            .query_row(
                r#"SELECT g FROM "sales" WHERE a = '536366'"#,
                (),
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(customer_id, None);
    }

    #[test]
    fn failing_record_rolls_back_everything() {
        let mut conn = sales_db();

        {
            let db_ta = conn.transaction().unwrap();
            let records = vec![
                Ok(record("536365", Some(17850))),
                Err(LoaderError::ParseCoercion {
                    row: 2,
                    column: "Quantity",
                    value: "x".into(),
                    target: "integer",
                }),
                Ok(record("536367", Some(13047))),
            ];
            assert!(bulk_insert(&db_ta, records.into_iter()).is_err());
        }

        assert_eq!(count_rows(&conn), 0);
    }

    #[test]
    fn missing_table_is_a_store_error() {
        let mut conn = Connection::open_in_memory().unwrap();

        let db_ta = conn.transaction().unwrap();
        let result = bulk_insert(&db_ta, std::iter::empty());
        assert!(matches!(result, Err(LoaderError::Store(_))));
    }
}
