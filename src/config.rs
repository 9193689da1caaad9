use std::path::PathBuf;

// Name of the table which contains all the sales records
pub(crate) static SALES_TABLE: &str = "sales";

// Header names of the CSV columns, in the positional order of the sales table
pub(crate) const SALES_COLUMNS: [&str; 8] = [
    "InvoiceNo",
    "StockCode",
    "Description",
    "Quantity",
    "InvoiceDate",
    "UnitPrice",
    "CustomerID",
    "Country",
];

pub(crate) const DEFAULT_DB_FILE: &str = "sales.db";
pub(crate) const DEFAULT_CSV_FILE: &str = "online_retail.csv";
pub(crate) const DEFAULT_SCHEMA_FILE: &str = "sql/01_schema.sql";
pub(crate) const DEFAULT_VIEW_FILE: &str = "sql/02_clean_view.sql";

/// Minimum time interval inbetween status reports
pub(crate) const TIME_BETWEEN_STATUS_REPORTS: std::time::Duration =
    std::time::Duration::from_secs(5);

/// Everything a [`crate::loader::Loader`] needs to know to provision one database
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LoaderConfig {
    /// SQLite db to create or overwrite
    pub(crate) db_file: PathBuf,

    /// CSV file with the raw sales data
    pub(crate) csv_path: PathBuf,

    /// SQL script creating the `sales` table
    pub(crate) schema_path: PathBuf,

    /// SQL script creating the cleaning view
    pub(crate) view_path: PathBuf,

    /// Run `VACUUM` after a successful import
    pub(crate) vacuum: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            db_file: DEFAULT_DB_FILE.into(),
            csv_path: DEFAULT_CSV_FILE.into(),
            schema_path: DEFAULT_SCHEMA_FILE.into(),
            view_path: DEFAULT_VIEW_FILE.into(),
            vacuum: false,
        }
    }
}
