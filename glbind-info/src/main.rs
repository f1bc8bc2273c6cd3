mod cli;
mod report;

use clap::Parser;
use glbind::config::{self, Config, ConfigError};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const LOG_LEVEL_ENV: &str = "GLBIND_LOG_LEVEL";

fn setup_logs_by_filter_level(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut filter_level = LevelFilter::from_str(log_level).unwrap_or(LevelFilter::OFF);

    if let Ok(data) = std::env::var(LOG_LEVEL_ENV) {
        if !data.is_empty() {
            filter_level = LevelFilter::from_str(&data).unwrap_or(filter_level);
        }
    }

    let filter = EnvFilter::builder()
        .with_default_directive(filter_level.into())
        .parse("")?;

    let stdout_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(filter);
    tracing_subscriber::registry().with(stdout_subscriber).init();

    let span = tracing::span!(tracing::Level::INFO, "logger");
    let _guard = span.enter();
    tracing::info!("log_level: {log_level}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Cli::parse();

    if let Some(config_path) = args.write_config.clone() {
        let _ = setup_logs_by_filter_level("TRACE");
        return match config::create_config_file(config_path) {
            Ok(_) => Ok(()),
            Err(ConfigError::AlreadyExists(path)) => {
                tracing::info!("configuration file already exists at {}", path.display());
                Ok(())
            }
            Err(err) => {
                tracing::error!("{err}");
                Err(err.into())
            }
        };
    }

    let (config, config_error) = match Config::try_load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.developer.log_level);
    if let Err(e) = setup_logs_by_filter_level(log_level) {
        eprintln!("unable to configure the logger: {e:?}");
    }

    match config_error {
        None | Some(ConfigError::PathNotFound) => {}
        Some(err) => tracing::warn!("{err}"),
    }

    let output = match args.command.unwrap_or_default() {
        cli::Command::Version { version } => report::version(&version),
        cli::Command::Extensions { extensions, names } => {
            report::extensions(&extensions, &names)
        }
        cli::Command::Registry { aliases } => report::registry(aliases),
        cli::Command::Library => report::library(&config)?,
    };
    print!("{output}");

    Ok(())
}
