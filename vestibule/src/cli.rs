use crate::{consts::VERSION, Application};
use clap::Parser;
use color_eyre::eyre;
use std::path::PathBuf;
use vestibule_config::Configuration;

/// Vestibule web application server
#[derive(Parser)]
#[command(about, author, version = VERSION)]
struct Args {
    /// Path to the configuration file
    #[clap(long, short)]
    config: PathBuf,
}

async fn boot(application: Application) -> eyre::Result<()> {
    let args = Args::parse();
    let config = Configuration::load(args.config).await?;
    vestibule_observability::initialise()?;

    let state = crate::initialise_state(&config);
    let shutdown_signal = crate::signal::shutdown();

    crate::http::run(state, application, &config, shutdown_signal).await
}

/// Entrypoint shared by the binaries
pub fn start(application: Application) -> eyre::Result<()> {
    color_eyre::install()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(boot(application))
}
