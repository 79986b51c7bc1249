use std::{fs::OpenOptions, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use loglite::{
    BlockingLock, Level, Logger, LoggerConfig, file_sink, init_logging, log_at, set_file_sink,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Emit a message at every level through loglite", long_about = None)]
struct Args {
    /// Threshold as a level name or ordinal (-1..4); overrides LOG_LEVEL
    #[arg(long)]
    level: Option<String>,
    /// Suppress console output
    #[arg(long, default_value_t = false)]
    quiet: bool,
    /// Append log lines to this file as well
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// JSON logger config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Serialize emissions with a blocking lock
    #[arg(long, default_value_t = false)]
    locked: bool,
    /// Message to log
    #[arg(default_value = "hello from loglite")]
    message: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.config {
        let config = LoggerConfig::load(path)?;
        let logger = Logger::from_config(&config)?;
        if loglite::install(logger).is_err() {
            anyhow::bail!("default logger already initialized");
        }
    }
    init_logging();

    let logger = loglite::logger();
    if let Some(level) = &args.level {
        logger.set_level_from_string(level)?;
    }
    if args.quiet {
        logger.set_quiet(true);
    }
    if args.locked {
        logger.set_lock(Some(Arc::new(BlockingLock::new())));
    }

    let file = match &args.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {:?}", path))?;
            let sink = file_sink(file);
            set_file_sink(Some(sink.clone()));
            Some(sink)
        }
        None => None,
    };

    let message = args.message.join(" ");
    for level in Level::ALL {
        log_at!(level, "{message}");
    }
    info!("threshold is {} via the log facade", logger.level_name());

    // the file is ours to close: detach it before dropping the last handle
    if let Some(file) = file {
        set_file_sink(None);
        drop(file);
    }
    Ok(())
}
