use rusqlite::Connection;

use crate::{
    config::{LoaderConfig, SALES_TABLE},
    error::LoaderError,
    import::bulk_insert,
    record::parse_records,
    script::{apply_schema, apply_view},
};

/// Provisions one SQLite db: schema, sales data and cleaning view
pub(crate) struct Loader {
    config: LoaderConfig,
}

impl Loader {
    pub(crate) fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Runs the whole pipeline, returning the number of imported records
    ///
    /// This operation is atomic: schema, records and view are applied in one transaction, so if
    /// any stage fails, the db remains unchanged. The connection is closed on every return path.
    pub(crate) fn run(&self) -> Result<usize, LoaderError> {
        let LoaderConfig {
            db_file,
            csv_path,
            schema_path,
            view_path,
            vacuum,
        } = &self.config;
        let run_t0 = std::time::Instant::now();

        info!("opening database {db_file:?}");
        let mut conn = Connection::open(db_file)?;

        crate::tweaks::before_bulk_insert(&mut conn)?;

        debug!("starting db transaction for the load");
        let db_ta = conn.transaction()?;

        apply_schema(&db_ta, schema_path)?;

        let records = parse_records(csv_path)?;
        let records_inserted = bulk_insert(&db_ta, records)?;
        info!("successfully imported {records_inserted} records into {SALES_TABLE:?}");

        apply_view(&db_ta, view_path)?;

        info!("committing changes to db");
        db_ta.commit()?;

        crate::tweaks::after_bulk_insert(&mut conn, *vacuum)?;

        info!("load took {:?}", run_t0.elapsed());
        Ok(records_inserted)
    }
}
