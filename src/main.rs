use anyhow::Context;
use breathe::cli::Cli;
use breathe::config::{Config, ConfigError};
use breathe::logging::init_tracing;
use breathe::ui::navigation::Screen;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let initial = if cli.skip_launch {
        Screen::StartExercise
    } else {
        Screen::Launch
    };

    tracing::info!(?initial, "starting breathe v{}", env!("CARGO_PKG_VERSION"));
    breathe::ui::run(config, initial)
        .await
        .context("terminal UI failed")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    cli.apply(&mut config);
    config.validate()?;
    Ok(config)
}
