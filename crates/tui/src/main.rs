mod form;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use termfolio_core::content;
use termfolio_core::model::Portfolio;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termfolio", about = "A single-page portfolio, rendered in your terminal")]
struct Args {
    /// Portfolio content file (JSON). Uses the built-in sample when omitted.
    content: Option<PathBuf>,

    /// Append tracing output to this file (the terminal itself is in raw
    /// mode, so logs can't go to stdout).
    #[arg(long)]
    log: Option<PathBuf>,

    /// Skip the loading splash.
    #[arg(long)]
    no_splash: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let portfolio = match &args.content {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading content file {}", path.display()))?;
            content::parse(&data)
                .with_context(|| format!("parsing content file {}", path.display()))?
        }
        None => Portfolio::sample(),
    };

    tracing::info!(name = %portfolio.name, "starting termfolio");
    renderer::run(&portfolio, args.no_splash)
}

fn init_logging(path: &std::path::Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
