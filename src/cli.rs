use clap::Parser;

use crate::config::{Credentials, QueryDefaults};
use crate::report::{export_csv, print_report};
use crate::ubersuggest::UbersuggestClient;

#[derive(Parser, Debug)]
#[command(
    name = "seogenius",
    version,
    about = "Look up keyword ideas on Ubersuggest and export them to CSV"
)]
pub struct Args {
    /// Seed keyword (quote it if it contains spaces)
    #[arg(value_parser = parse_keyword)]
    pub keyword: String,
}

/// Rejects blank seeds; anything else is used verbatim, surrounding
/// whitespace included.
fn parse_keyword(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("keyword must not be empty".to_string());
    }
    Ok(raw.to_string())
}

/// Log filter comes from `RUST_LOG`, defaulting to warnings only. Logs go
/// to stderr so stdout stays the report.
pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = QueryDefaults::from_env()?;
    let client = UbersuggestClient::new(Credentials::from_env())?;

    let results = client.fetch(&defaults.query(&args.keyword)).await?;
    if let Some(error) = results.error() {
        eprintln!("Warning: {error}");
        if let Some(raw) = results.raw() {
            tracing::debug!("raw response: {raw}");
        }
    }

    print_report(&results)?;

    let path = export_csv(&results, &args.keyword, &std::env::current_dir()?)?;
    println!("\nCSV saved to: {}", path.display());
    Ok(())
}
