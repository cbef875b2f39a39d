use anyhow::Context;
use clap::Parser;
use mvpterm::config::Config;
use mvpterm::demo::DemoApp;
use mvpterm::logging::init_tracing;
use std::path::PathBuf;

/// Two colour-coded screens sharing one counter, wired Model-View-Presenter style.
#[derive(Debug, Parser)]
#[command(name = "mvpterm", version, about)]
struct Cli {
    /// Config file (default: ~/.config/mvpterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    init_tracing(&config.logging, cli.log_file.as_deref())
        .context("failed to open log file")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let app = DemoApp::build(&config.demo).context("failed to build demo")?;
    app.run(&config.demo.first_screen, &config.ui)?;

    tracing::info!(value = ?app.value()?, "exiting");
    Ok(())
}
