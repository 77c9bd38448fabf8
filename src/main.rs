use std::path::PathBuf;

use clap::Parser;

use psoc_spectro::{run_spectrometer_gui, SpectrometerConfig};

/// Controller window for an AS7262 spectral sensor on a PSoC.
#[derive(Parser, Debug)]
#[command(name = "spectro-gui", version)]
struct Cli {
    /// Use the built-in simulated sensor instead of the USB link
    #[arg(long)]
    simulate: bool,

    /// Configuration file (default: ~/.psoc-spectro/config.yaml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective configuration to the default path and exit
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => SpectrometerConfig::load(path)?,
        None => SpectrometerConfig::load_from_default_path().unwrap_or_else(|e| {
            log::debug!("using default config: {}", e);
            SpectrometerConfig::default()
        }),
    };
    cfg.simulate |= cli.simulate;

    if cli.save_config {
        let path = cfg.save_to_default_path()?;
        log::info!("saved config to {}", path.display());
        return Ok(());
    }

    run_spectrometer_gui(cfg)?;
    Ok(())
}
