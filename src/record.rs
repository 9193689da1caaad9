//! Parsing of the raw sales CSV into typed [`Record`]s
use serde::Deserialize;
use std::{io::Read, path::Path};

use crate::{config::SALES_COLUMNS, error::LoaderError};

/// One sales line, in the positional order of the `sales` table
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record {
    pub(crate) invoice_no: String,
    pub(crate) stock_code: String,
    pub(crate) description: String,
    pub(crate) quantity: i64,
    pub(crate) invoice_date: String,
    pub(crate) unit_price: f64,
    pub(crate) customer_id: Option<i64>,
    pub(crate) country: String,
}

/// A CSV row before coercion, every field is kept as text
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "InvoiceNo")]
    invoice_no: String,
    #[serde(rename = "StockCode")]
    stock_code: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "InvoiceDate")]
    invoice_date: String,
    #[serde(rename = "UnitPrice")]
    unit_price: String,
    #[serde(rename = "CustomerID")]
    customer_id: String,
    #[serde(rename = "Country")]
    country: String,
}

impl RawRecord {
    /// Coerce all numeric fields, `row` is the 1-based data row number used in errors
    fn coerce(self, row: usize) -> Result<Record, LoaderError> {
        let coercion_error = |column, value: &str, target| LoaderError::ParseCoercion {
            row,
            column,
            value: value.to_owned(),
            target,
        };

        let quantity = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| coercion_error("Quantity", &self.quantity, "integer"))?;
        let unit_price = self
            .unit_price
            .trim()
            .parse()
            .map_err(|_| coercion_error("UnitPrice", &self.unit_price, "float"))?;
        let customer_id = coerce_customer_id(&self.customer_id)
            .ok_or_else(|| coercion_error("CustomerID", &self.customer_id, "integer"))?;

        Ok(Record {
            invoice_no: self.invoice_no,
            stock_code: self.stock_code,
            description: self.description,
            quantity,
            invoice_date: self.invoice_date,
            unit_price,
            customer_id,
            country: self.country,
        })
    }
}

/// Customer ids are exported as floats (e.g. `17850.0`) and are missing for guest purchases
///
/// Returns `Some(None)` for an empty field, `None` if the field is not coercible.
fn coerce_customer_id(raw: &str) -> Option<Option<i64>> {
    if raw.is_empty() {
        return Some(None);
    }

    let value: f64 = raw.trim().parse().ok()?;

    // 2^63 is exactly representable, i64::MAX is not
    let in_range = value >= i64::MIN as f64 && value < -(i64::MIN as f64);
    if !value.is_finite() || !in_range {
        return None;
    }

    Some(Some(value.trunc() as i64))
}

/// Open a sales CSV file and stream its rows as [`Record`]s
///
/// The header is validated eagerly, rows are coerced lazily while the iterator is consumed.
pub(crate) fn parse_records(
    csv_path: &Path,
) -> Result<impl Iterator<Item = Result<Record, LoaderError>>, LoaderError> {
    if !csv_path.exists() {
        return Err(LoaderError::MissingFile(csv_path.to_owned()));
    }

    info!("loading data from {csv_path:?}");
    let reader = csv::ReaderBuilder::new().from_path(csv_path)?;
    records_from_reader(reader)
}

/// Like [`parse_records`], but for an already opened CSV reader
pub(crate) fn records_from_reader<R: Read>(
    mut reader: csv::Reader<R>,
) -> Result<impl Iterator<Item = Result<Record, LoaderError>>, LoaderError> {
    let headers = reader.headers()?;
    trace!("found the following CSV header:\n{headers:?}");

    if let Some(missing) = SALES_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(LoaderError::MissingColumn(missing));
    }

    Ok(reader
        .into_deserialize::<RawRecord>()
        .enumerate()
        .map(|(idx, maybe_raw)| maybe_raw?.coerce(idx + 1)))
}
