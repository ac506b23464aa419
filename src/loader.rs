use crate::models::Sale;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COL_COUNTY: &str = "County";
const COL_DATE: &str = "Date";
const COL_ITEM: &str = "Item Description";
const COL_PRICE: &str = "Sale (Dollars)";
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Load the sales export at `path` and group rows by upper-cased county.
///
/// Rows whose `Sale (Dollars)` field does not parse as a number are
/// skipped (logged at debug level); this is the only recoverable
/// failure in the pipeline. A `Date` value that does not match
/// `MM/DD/YYYY` aborts the whole load, as do a missing file and a
/// missing header column. The asymmetry between the amount and date
/// policies is kept as observable behavior of the original report.
///
/// Insertion order within a group follows file order but carries no
/// meaning downstream; both the aggregation and the report re-sort.
pub fn load_sales<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, Vec<Sale>>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening sales data {}", path.display()))?;
    load_sales_from_reader(file)
}

/// Same as [`load_sales`], from any reader. The source is consumed in full.
pub fn load_sales_from_reader<R: Read>(rdr: R) -> Result<BTreeMap<String, Vec<Sale>>> {
    let mut csv = csv::ReaderBuilder::new().from_reader(rdr);
    let headers = csv.headers().context("reading CSV header row")?.clone();
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("missing column {name:?} in header"))
    };
    let county_col = col(COL_COUNTY)?;
    let date_col = col(COL_DATE)?;
    let item_col = col(COL_ITEM)?;
    let price_col = col(COL_PRICE)?;

    let mut counties: BTreeMap<String, Vec<Sale>> = BTreeMap::new();
    for (idx, row) in csv.records().enumerate() {
        let row = row.with_context(|| format!("reading CSV record {}", idx + 1))?;

        let raw_price = row.get(price_col).unwrap_or("");
        let price: f64 = match raw_price.trim().parse() {
            Ok(p) => p,
            Err(_) => {
                log::debug!("skipping record {}: unparseable amount {raw_price:?}", idx + 1);
                continue;
            }
        };

        let raw_date = row.get(date_col).unwrap_or("");
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .with_context(|| format!("invalid date {raw_date:?}, expected MM/DD/YYYY"))?;

        let county = row.get(county_col).unwrap_or("").to_uppercase();
        let item = row.get(item_col).unwrap_or("").to_string();
        counties
            .entry(county)
            .or_default()
            .push(Sale { date, item, price });
    }
    Ok(counties)
}
