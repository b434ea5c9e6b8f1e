//! Binary entry point for `homework-bot`.
//!
//! This module provides the command-line interface for homework-bot with options
//! for configuration file paths, log location and logging verbosity. It
//! initializes the necessary components and starts the service.

use clap::Parser;
use homework_bot::base::{config::Config, types::Void};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Homework-bot – Practicum homework review notifications in Telegram.
///
/// Configuration can come from `config.toml`, a `.env` file, or environment
/// variables. `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID` are
/// required.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Directory for the rotated log files.
    #[arg(long, default_value = "logs")]
    log_dir: std::path::PathBuf,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the homework-bot binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the bot.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the rotating file layer.

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("homework-bot")
        .filename_suffix("log")
        .max_log_files(5)
        .build(&args.log_dir)?;
    let (file_writer, _file_guard) = tracing_appender::non_blocking(appender);

    let file = tracing_subscriber::fmt::layer().with_writer(file_writer).with_ansi(false).with_level(true).with_target(true);

    tracing_subscriber::registry().with(level_filter).with(stdout).with(file).init();

    // Load the `.env` file, if any, before reading the environment.
    dotenvy::dotenv().ok();

    let config = Config::load(args.config.as_deref()).inspect_err(|e| tracing::error!("Failed to load configuration: {}", e))?;

    homework_bot::start(config).await
}
