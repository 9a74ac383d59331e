#![forbid(unsafe_code)]

mod carousel;
mod config;
mod constants;
mod disclosure;
mod font;
mod gui;
mod types;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use config::{ConfigFormat, PortfolioConfig};
use constants::logging::LOG_LEVEL_ENV;

/// Personal profile viewer with a photo album and collapsible details
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Portfolio config file (TOML, or JSON by extension)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the reference config to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// Allow --init-config to replace an existing file
    #[arg(long, requires = "init_config")]
    force: bool,

    /// Print the resolved config as JSON and exit
    #[arg(long, conflicts_with = "init_config")]
    print_config: bool,
}

fn parse_log_level(value: &str) -> TraceLevel {
    match value.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = parse_log_level(
        &std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string()),
    );
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.unwrap_or_else(PortfolioConfig::default_path);

    if cli.init_config {
        PortfolioConfig::default().save(&config_path, cli.force)?;
        println!("Wrote reference config to {}", config_path.display());
        return Ok(());
    }

    let config = PortfolioConfig::load(&config_path)?;

    if cli.print_config {
        println!("{}", config.render(ConfigFormat::Json)?);
        return Ok(());
    }

    info!(profile = %config.profile.name, "Opening portfolio");
    gui::run_gui(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["portfolio-view", "--config", "me.json", "--print-config"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("me.json")));
        assert!(cli.print_config);
        assert!(!cli.init_config);
    }

    #[test]
    fn test_force_requires_init_config() {
        assert!(Cli::try_parse_from(["portfolio-view", "--force"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-view", "--init-config", "--force"]).is_ok());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_log_level("warn"), TraceLevel::WARN);
        assert_eq!(parse_log_level("bogus"), TraceLevel::INFO);
    }
}
