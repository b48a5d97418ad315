//! Command Line Interface for best-trade search.
mod generate;

use anyhow::{Context, Result};
use best_trade_api::{ApiServer, ServerConfig};
use best_trade_data::{CsvFileSource, PriceSource, load};
use best_trade_domain::time::{format_instant, parse_instant};
use best_trade_domain::{SizingError, TradePair, find_best_trade, size_position};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use generate::{GeneratorConfig, Pattern, append_rows, generate_rows};
use prettytable::{Table, row};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "best-trade")]
#[command(about = "Finds the most profitable buy/sell pair in a price series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Interface to bind (default: $HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: $PORT or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// CSV price file (default: $PRICE_DATA_PATH or price_data.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Load the price file on first request instead of at startup
        #[arg(long)]
        no_preload: bool,
    },
    /// Find the best trade in a window of a CSV price file
    Query {
        /// Window start (ISO-8601, UTC when no offset is given)
        #[arg(short, long)]
        start: String,

        /// Window end (ISO-8601, UTC when no offset is given)
        #[arg(short, long)]
        end: String,

        /// CSV price file (default: $PRICE_DATA_PATH or price_data.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Funds available to invest
        #[arg(short, long)]
        funds: Option<Decimal>,

        /// Allow buying fractional shares (two decimal places)
        #[arg(long)]
        fractional: bool,
    },
    /// Append synthetic price rows to a CSV file
    Generate {
        /// Number of rows to generate
        #[arg(long, default_value_t = 86_400)]
        rows: usize,

        /// First timestamp (ISO-8601)
        #[arg(long, default_value = "2025-07-01T10:00:40Z")]
        start: String,

        /// Minimum price
        #[arg(long, default_value_t = 0.01)]
        min: f64,

        /// Maximum price
        #[arg(long, default_value_t = 10.0)]
        max: f64,

        /// Seconds between rows
        #[arg(long, default_value_t = 1)]
        interval: i64,

        /// Price curve shape
        #[arg(long, value_enum, default_value_t = Pattern::Random)]
        pattern: Pattern,

        /// CSV file to append to
        #[arg(short, long, default_value = "price_data.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            data,
            no_preload,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(data) = data {
                config.data_path = data;
            }
            config.preload = !no_preload;

            info!("Serving prices from {}", config.data_path.display());
            ApiServer::new(config).run().await?;
        }
        Commands::Query {
            start,
            end,
            data,
            funds,
            fractional,
        } => {
            let data = data.unwrap_or_else(|| ServerConfig::from_env().data_path);
            let source = CsvFileSource::new(data);
            let series = load(&source)
                .await
                .with_context(|| format!("failed to load {}", source.describe()))?;

            let result = find_best_trade(&series, &start, &end)?;
            let Some(pair) = result.pair() else {
                println!("No profitable trade found for the given time period.");
                return Ok(());
            };

            print_trade(&pair);
            if let Some(funds) = funds {
                print_position(funds, &pair, fractional)?;
            }
        }
        Commands::Generate {
            rows,
            start,
            min,
            max,
            interval,
            pattern,
            output,
        } => {
            let start = parse_instant(&start)
                .with_context(|| format!("invalid start time: {start}"))?;
            let config = GeneratorConfig {
                rows,
                start,
                min_price: min,
                max_price: max,
                interval_secs: interval,
                pattern,
            };

            let generated = generate_rows(&config, &mut rand::rng())?;
            append_rows(&output, &generated)?;
            println!("Appended {} rows to {}", generated.len(), output.display());
        }
    }

    Ok(())
}

fn print_trade(pair: &TradePair) {
    let mut table = Table::new();
    table.add_row(row!["", "Time", "Price"]);
    table.add_row(row![
        "Buy",
        format_instant(&pair.buy.timestamp),
        format!("{:.2}", pair.buy.price)
    ]);
    table.add_row(row![
        "Sell",
        format_instant(&pair.sell.timestamp),
        format!("{:.2}", pair.sell.price)
    ]);
    table.printstd();
}

fn print_position(funds: Decimal, pair: &TradePair, fractional: bool) -> Result<()> {
    match size_position(funds, pair.buy.price, pair.sell.price, fractional) {
        Ok(size) => {
            println!("Stocks you can buy: {}", size.shares);
            println!("Potential profit:   ${:.2}", size.profit);
            Ok(())
        }
        Err(SizingError::InsufficientFunds) => {
            println!("{}", SizingError::InsufficientFunds);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
