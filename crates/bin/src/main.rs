//! Cascais CLI binary.
//!
//! Command-line interface for CAPM cost-of-equity estimation.

use cascais::analyze::{CapmRequest, run_capm};
use cascais_capm::CapmEstimator;
use cascais_data::YahooHistoryProvider;
use cascais_output::CapmReport;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::process;
use std::time::Duration as StdDuration;

#[derive(Parser)]
#[command(name = "cascais")]
#[command(about = "Cascais: CAPM cost-of-equity estimation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate beta, alpha, and cost of equity for a stock
    Analyze {
        /// Stock symbol
        symbol: String,

        /// Market benchmark symbol
        #[arg(long, default_value = "^GSPC")]
        benchmark: String,

        /// Analysis period in years, ending today
        #[arg(long, default_value = "2")]
        years: u32,

        /// Annual risk-free rate as a decimal (0.04 = 4%)
        #[arg(long, default_value = "0.04")]
        risk_free: f64,

        /// Periods per year used for annualization
        #[arg(long, default_value = "252")]
        periods: usize,

        /// Use log returns instead of simple returns
        #[arg(long)]
        log_returns: bool,

        /// Market-return annualization method (arithmetic or geometric)
        #[arg(long, default_value = "arithmetic")]
        method: String,

        /// Output format (text, markdown, or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Suppress the report; exit status only
        #[arg(long)]
        quiet: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbol,
            benchmark,
            years,
            risk_free,
            periods,
            log_returns,
            method,
            format,
            quiet,
        } => {
            analyze(
                &symbol,
                &benchmark,
                years,
                risk_free,
                periods,
                log_returns,
                &method,
                &format,
                quiet,
            )
            .await?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn analyze(
    symbol: &str,
    benchmark: &str,
    years: u32,
    risk_free: f64,
    periods: usize,
    log_returns: bool,
    method: &str,
    format: &str,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let symbol = symbol.to_uppercase();

    let estimator = CapmEstimator::from_args(periods, log_returns, method);
    for warning in estimator.warnings() {
        eprintln!("Warning: {}", warning);
    }

    let request = CapmRequest::new(symbol.clone(), benchmark.to_string())
        .with_years(years)
        .with_risk_free_rate(risk_free);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(StdDuration::from_millis(100));
    pb.set_message(format!("Fetching {} and {}...", symbol, benchmark));

    let provider = YahooHistoryProvider::new();
    let estimate = match run_capm(&provider, &estimator, &request).await {
        Ok(estimate) => {
            pb.finish_and_clear();
            estimate
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    if quiet {
        return Ok(());
    }

    let report = CapmReport::new(
        symbol,
        benchmark.to_string(),
        request.start.date_naive(),
        request.end.date_naive(),
        risk_free,
        estimate,
    );

    match format {
        "json" => println!("{}", report.to_json()?),
        "markdown" => println!("{}", report.to_markdown()),
        _ => println!("{}", report.to_ascii_table()),
    }

    Ok(())
}
