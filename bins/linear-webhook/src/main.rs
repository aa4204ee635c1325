//! linear-webhook: sign and verify captured Linear webhook deliveries.
//!
//! Reads raw bodies from files or stdin; it never listens for HTTP itself.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linear_webhooks::WebhookVerifier;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::verify::TimestampSource;
use config::Config;
use output::Format;

/// Exit code for usage, configuration and IO failures
const EXIT_ERROR: u8 = 4;

/// Sign and verify Linear webhook deliveries
#[derive(Parser)]
#[command(name = "linear-webhook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Shared webhook secret
    #[arg(long, global = true, env = "LINEAR_WEBHOOK_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: Format,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the signature for a body
    Sign {
        /// File holding the raw body (stdin if omitted)
        #[arg(short, long)]
        body: Option<PathBuf>,
    },

    /// Verify a body against its signature
    Verify {
        /// Hex signature from the linear-signature header
        #[arg(short, long)]
        signature: String,

        /// File holding the raw body (stdin if omitted)
        #[arg(short, long)]
        body: Option<PathBuf>,

        /// Delivery timestamp in milliseconds since the epoch
        #[arg(short, long, conflicts_with = "from_payload", allow_negative_numbers = true)]
        timestamp: Option<i64>,

        /// Read the timestamp from the body's webhookTimestamp field
        #[arg(long)]
        from_payload: bool,

        /// Freshness window in milliseconds (overrides the config file)
        #[arg(long)]
        tolerance_ms: Option<u64>,
    },
}

fn main() -> ExitCode {
    // clap's own usage exit code (2) would collide with a stale timestamp.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    if let Some(ref path) = config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let secret = cli
        .secret
        .or(config.schema.verifier.secret)
        .context("No webhook secret: pass --secret, set LINEAR_WEBHOOK_SECRET, or add [verifier] secret to the config file")?;

    match cli.command {
        Commands::Sign { body } => {
            let verifier = WebhookVerifier::new(secret);
            let body = commands::read_body(body.as_deref())?;
            commands::sign::run(&verifier, &body, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Verify {
            signature,
            body,
            timestamp,
            from_payload,
            tolerance_ms,
        } => {
            let tolerance_ms = tolerance_ms.unwrap_or(config.schema.verifier.tolerance_ms);
            let verifier =
                WebhookVerifier::new(secret).with_tolerance(Duration::from_millis(tolerance_ms));

            let source = match (timestamp, from_payload) {
                (Some(ts), _) => TimestampSource::Explicit(ts),
                (None, true) => TimestampSource::Payload,
                (None, false) => TimestampSource::None,
            };

            let body = commands::read_body(body.as_deref())?;
            commands::verify::run(&verifier, &body, &signature, source, cli.format)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "linear_webhook=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
