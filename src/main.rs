use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use countdown::core::config::{self, CliOverrides, ResolvedConfig};
use countdown::core::countdown::remaining;
use countdown::core::date_store::{self, StoreError};
use countdown::core::state::App;
use countdown::core::target::TargetDate;
use countdown::tui;

#[derive(Parser)]
#[command(
    name = "countdown",
    version,
    about = "Live countdown to an editable target date"
)]
struct Args {
    /// Date file to read and write (default: <config dir>/countdown/date.csv)
    #[arg(long, value_name = "PATH")]
    date_file: Option<PathBuf>,

    /// Countdown refresh rate in Hz (1-240)
    #[arg(long, value_name = "HZ")]
    tick_rate: Option<u32>,

    /// Log file (default: <config dir>/countdown/countdown.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the remaining time once and exit without starting the TUI
    #[arg(long)]
    once: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    init_logger(&args);

    let file_config = config::load_default_config().context("failed to load settings")?;
    let cli = CliOverrides {
        date_file: args.date_file.clone(),
        tick_rate_hz: args.tick_rate,
    };
    let config = config::resolve(&file_config, &cli).context("invalid settings")?;
    info!("Countdown starting up with {:?}", config);

    let date = load_target(&config)?;
    let app = App::from_config(date, &config)
        .with_context(|| format!("target {date} cannot be edited with these settings"))?;

    if args.once {
        println!(
            "{}",
            remaining(app.countdown.target(), Local::now().naive_local())
        );
        return Ok(());
    }

    tui::run(app, &config).context("countdown session ended with an error")
}

/// File logger; the terminal belongs to the TUI. Logging is skipped if the
/// file can't be created.
fn init_logger(args: &Args) {
    let Some(path) = args.log_file.clone().or_else(config::default_log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

/// Reads the date file. A corrupt file aborts startup unless
/// `fallback_on_parse_error` is set.
fn load_target(config: &ResolvedConfig) -> Result<TargetDate> {
    match date_store::load_date(&config.date_path) {
        Ok(date) => Ok(date),
        Err(e @ (StoreError::Parse { .. } | StoreError::Invalid(_)))
            if config.fallback_on_parse_error =>
        {
            warn!(
                "Ignoring unreadable date file {}: {}",
                config.date_path.display(),
                e
            );
            Ok(TargetDate::DEFAULT)
        }
        Err(e) => Err(e).with_context(|| {
            format!("failed to load target date from {}", config.date_path.display())
        }),
    }
}
