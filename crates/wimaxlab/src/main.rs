use std::path::PathBuf;

use clap::Parser;

mod app;
mod components;
mod logging;
mod screens;
mod state;
mod util;

use app::App;
use logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "wimaxlab")]
#[command(about = "A terminal dashboard for textbook WiMAX network formulas")]
struct Args {
    /// Path to the data directory (default: ~/.wimaxlab/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Seed for the random source (schedule and noise draws become reproducible)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wimaxlab")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::new(args.seed)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
