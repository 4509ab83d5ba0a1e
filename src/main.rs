use atlas_index::{cli::Cli, commands};
use clap::Parser;

fn setup_logger() -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    Registry::default()
        .with(LevelFilter::from(Level::INFO))
        .with(layer().with_ansi(true).with_target(false).without_time())
        .try_init()?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;
    commands::index(Cli::parse())
}
