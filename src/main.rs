use anyhow::Context;
use clap::Parser;
use durian_grading::{cli::Args, config, start_app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = config::get_configuration(&args.config_dir).context("failed to load config")?;
    let log_level = config.log_level.as_str();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    start_app(config, &args).context("failed to grade detections")?;

    Ok(())
}
