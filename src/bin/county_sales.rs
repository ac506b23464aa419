use anyhow::Result;
use clap::{Parser, ValueEnum};
use county_sales::{DEFAULT_SALES_DATA, MIN_SALES, NUM_TOP_COUNTIES, NUM_TOP_SALES};
use county_sales::{loader, report, stats, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "county-sales",
    version,
    about = "Summarize & report liquor sales by county"
)]
struct Cli {
    /// Path to the sales CSV export.
    #[arg(short, long, default_value = DEFAULT_SALES_DATA)]
    input: PathBuf,
    /// Number of counties shown, ranked by total sales.
    #[arg(long, default_value_t = NUM_TOP_COUNTIES)]
    top_counties: usize,
    /// Number of individual sales listed per county.
    #[arg(long, default_value_t = NUM_TOP_SALES)]
    top_sales: usize,
    /// Drop counties with fewer sales than this.
    #[arg(long, default_value_t = MIN_SALES)]
    min_sales: usize,
    /// Save the computed summaries to a file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let counties = loader::load_sales(&cli.input)?;
    log::debug!("loaded {} counties from {}", counties.len(), cli.input.display());
    let summaries = stats::summarize(counties, cli.min_sales);

    if let Some(path) = cli.out.as_ref() {
        let fmt = match cli.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        let only: Vec<_> = summaries.iter().map(|(s, _)| s.clone()).collect();
        match fmt.as_str() {
            "csv" => storage::save_csv(&only, path)?,
            "json" => storage::save_json(&only, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} summaries to {}", only.len(), path.display());
    }

    print!("{}", report::render(&summaries, cli.top_counties, cli.top_sales));
    Ok(())
}
