use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tempus::models::{FormatRegistry, ServerConfig};
use tempus::server;
use tempus::services::{Clock, FixedClock, SystemClock, TimeFormatter, DEFAULT_TIMEZONE};

#[derive(Parser)]
#[command(name = "tempus")]
#[command(about = "Tempus - the current time in fixed formats and IANA timezones")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the current time in one format
    Now {
        /// Format code (see `tempus formats`)
        format_code: String,

        /// IANA timezone (e.g. "America/New_York")
        #[arg(long, default_value = DEFAULT_TIMEZONE)]
        tz: String,

        /// Format this RFC 3339 instant instead of the current time
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// List all format codes with an example for the current UTC time
    Formats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Now { format_code, tz, at }) => run_now_command(&format_code, &tz, at),
        Some(Commands::Formats) => run_formats_command(),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tempus=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn cli_formatter(clock: Arc<dyn Clock>) -> TimeFormatter {
    TimeFormatter::new(Arc::new(FormatRegistry::builtin()), clock)
}

/// Print a single formatted time (no server needed)
fn run_now_command(format_code: &str, tz: &str, at: Option<DateTime<Utc>>) -> anyhow::Result<()> {
    init_cli_tracing();

    let clock: Arc<dyn Clock> = match at {
        Some(instant) => Arc::new(FixedClock(instant)),
        None => Arc::new(SystemClock),
    };

    let formatted = cli_formatter(clock).now_in(format_code, tz)?;
    println!("{}", formatted.formatted_time);

    Ok(())
}

/// Print every format code with a live UTC example
fn run_formats_command() -> anyhow::Result<()> {
    init_cli_tracing();

    let formatter = cli_formatter(Arc::new(SystemClock));
    let examples = formatter.examples();
    let width = examples.iter().map(|(code, _)| code.len()).max().unwrap_or(0);

    for (spec, (code, example)) in formatter.registry().iter().zip(examples) {
        println!("  {code:<width$}  {example}  ({})", spec.description);
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Tempus v{VERSION} - Automate All The Things");
    println!("Current time in fixed formats and IANA timezones\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:8000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nFormats:");
    for code in FormatRegistry::builtin().codes() {
        println!("  {code}");
    }

    println!("\nCommands:");
    println!("  tempus serve             Start the HTTP server");
    println!("  tempus now <code> --tz   Print the current time in one format");
    println!("  tempus formats           List formats with live examples");
    println!("\nRun 'tempus --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tempus=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let state = server::create_app_state(Arc::new(SystemClock));
    let app = server::build_app(state, config.docs);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, docs = config.docs, "Tempus server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
