//! county_sales
//!
//! A small Rust library for loading, summarizing, and reporting Iowa
//! liquor sales grouped by county. Pairs with the `county-sales` CLI.
//!
//! ### Features
//! - Load a sales CSV into typed records grouped by (upper-cased) county
//! - Per-county summary statistics (mean and total sale, 2 decimals)
//! - Minimum-sample filter so thinly traded counties drop out
//! - Ranked fixed-width text report of top counties and their top sales
//! - Save computed summaries as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use county_sales::{loader, report, stats, MIN_SALES, NUM_TOP_COUNTIES, NUM_TOP_SALES};
//!
//! let counties = loader::load_sales("./data/ia_liquor_sales.csv")?;
//! let summaries = stats::summarize(counties, MIN_SALES);
//! print!("{}", report::render(&summaries, NUM_TOP_COUNTIES, NUM_TOP_SALES));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod loader;
pub mod models;
pub mod report;
pub mod stats;
pub mod storage;

pub use models::{Sale, Summary};
pub use models::{DEFAULT_SALES_DATA, MIN_SALES, NUM_TOP_COUNTIES, NUM_TOP_SALES};
