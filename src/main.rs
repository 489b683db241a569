//! Threat feed service entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use axum::body::Bytes;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use threat_feed::analytics::{fetch_threat_csv, parse_scores, ScoreStats};
use threat_feed::api::{create_router, AppState};
use threat_feed::config::Config;
use threat_feed::dataset;
use threat_feed::metrics;
use threat_feed::utils::shutdown_signal;

/// Synthetic threat-score CSV feed.
#[derive(Parser, Debug)]
#[command(name = "threat-feed")]
#[command(about = "Serves a fixed synthetic threat dataset as CSV over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the feed server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Render the dataset CSV to stdout or a file without serving it.
    Export {
        /// Output file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch the feed over HTTP and report score statistics.
    Analyze {
        /// Feed URL (defaults to the local server on the configured port).
        #[arg(short, long)]
        url: Option<String>,

        /// Only aggregate the first N scores.
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("threat_feed=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Export { output }) => cmd_export(output).await,
        Some(Command::Analyze { url, limit }) => cmd_analyze(url, limit).await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("THREAT FEED - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Log Level: {}", config.rust_log);
    println!("  Dataset Rows: {}", dataset::DATASET_SIZE);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Render the dataset CSV without starting the server.
///
/// Produces the same bytes the feed endpoint serves.
async fn cmd_export(output: Option<PathBuf>) -> anyhow::Result<()> {
    let records = dataset::build();

    match output {
        Some(path) => {
            dataset::write_file(&path, &records)?;
            info!("Wrote {} rows to {}", records.len(), path.display());
        }
        None => {
            print!("{}", dataset::render(&records));
        }
    }

    Ok(())
}

/// Fetch the feed as a consumer and report score statistics.
async fn cmd_analyze(url: Option<String>, limit: Option<usize>) -> anyhow::Result<()> {
    let url = match url {
        Some(u) => u,
        None => {
            let config = Config::load()?;
            format!("http://127.0.0.1:{}/threat_data", config.port)
        }
    };

    println!("======================================================================");
    println!("THREAT FEED - SCORE ANALYSIS");
    println!("======================================================================");
    println!("Feed URL: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    // Fetch
    print!("\n1. Fetching feed... ");
    let fetch_start = Instant::now();
    let csv = fetch_threat_csv(&client, &url).await?;
    let fetch_ms = fetch_start.elapsed().as_secs_f64() * 1000.0;
    println!("OK ({} bytes)", csv.len());

    // Parse
    print!("\n2. Parsing scores... ");
    let parse_start = Instant::now();
    let mut scores = parse_scores(&csv)?;
    let parse_ms = parse_start.elapsed().as_secs_f64() * 1000.0;
    println!("OK ({} scores)", scores.len());

    if let Some(limit) = limit {
        scores.truncate(limit);
        println!("   Limited to first {} scores", scores.len());
    }

    // Compute
    print!("\n3. Computing statistics... ");
    let compute_start = Instant::now();
    let stats = ScoreStats::compute(&scores)
        .ok_or_else(|| anyhow::anyhow!("feed returned no scores to aggregate"))?;
    let compute_ms = compute_start.elapsed().as_secs_f64() * 1000.0;
    println!("OK");

    println!("\n----------------------------------------------------------------------");
    println!("Results:");
    println!("  Scores:   {}", stats.count);
    println!("  Mean:     {}", stats.mean);
    println!("  Variance: {}", stats.variance);
    println!("----------------------------------------------------------------------");
    println!("Stage Timings:");
    println!("  Fetch:   {:.1}ms", fetch_ms);
    println!("  Parse:   {:.1}ms", parse_ms);
    println!("  Compute: {:.1}ms", compute_ms);
    println!("======================================================================");
    println!("ANALYSIS COMPLETE");
    println!("======================================================================");

    Ok(())
}

/// Run the feed server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Install the metrics recorder before anything records
    let prometheus = metrics::init_metrics()?;

    // Build and render the dataset once, before the listener starts.
    // It is immutable for the rest of the process lifetime.
    let render_start = Instant::now();
    let records = dataset::build();
    let csv = dataset::render(&records);
    metrics::record_render_latency(render_start);
    metrics::set_dataset_rows(records.len());

    info!("Dataset ready: {} rows, {} bytes", records.len(), csv.len());

    // Create app state
    let app_state = AppState::new(Bytes::from(csv)).with_prometheus(prometheus);
    let router = create_router(app_state);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}
