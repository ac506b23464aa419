use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default location of the sales export consumed by the CLI.
pub const DEFAULT_SALES_DATA: &str = "./data/ia_liquor_sales.csv";
/// How many counties the report shows, ranked by total sales.
pub const NUM_TOP_COUNTIES: usize = 10;
/// How many individual sales are listed per county.
pub const NUM_TOP_SALES: usize = 5;
/// Counties with fewer sales than this are dropped from the report.
pub const MIN_SALES: usize = 10;

/// One transaction row from the sales export (one row = one sale).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub date: NaiveDate,
    pub item: String,
    pub price: f64,
}

/// Summary statistics for one county's sales.
///
/// `mean` and `total` are rounded to 2 decimals when computed and are
/// never recomputed afterwards; they always describe the full sales
/// vector they were derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub county: String,
    pub mean: f64,
    pub total: f64,
}
