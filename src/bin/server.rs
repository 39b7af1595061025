//! Parking Server
//!
//! HTTP front end for the parking engine.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use parking_engine::{http, LogSink, LotConfig, ParkingEngine, SlotCategory, TIERED_HOURS};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parking-server")]
#[command(about = "HTTP server for the parking slot allocation and billing engine")]
struct Args {
    /// Path to a TOML lot configuration (capacities and tariffs)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number
    #[arg(short = 'P', long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading lot configuration: {:?}", path);
            LotConfig::load(path)?
        }
        None => LotConfig::default(),
    };
    let engine = Arc::new(ParkingEngine::new(config).with_sink(Arc::new(LogSink::new())));
    for category in SlotCategory::ALL {
        let tariff = engine.tariffs().for_category(category);
        info!(
            "{} slots: {} (Rs {} first {} hours, Rs {} after)",
            category,
            engine.capacity().for_category(category),
            tariff.base_rate,
            TIERED_HOURS,
            tariff.additional_rate
        );
    }

    let addr = format!("{}:{}", args.host, args.port);
    info!("Parking server listening on http://{}", addr);
    http::serve(engine, &addr).await?;

    Ok(())
}

/// Directives from `RUST_LOG` when they parse, otherwise `info`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
