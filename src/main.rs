use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use flowfields::cli::{run, Args};
use flowfields::config::load_config;
use flowfields::logging::init_logging;
use flowfields::registry::Registry;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args.config)
        .with_context(|| format!("unable to load {}", args.config))?;
    let _handle = init_logging(&config.general)?;

    info!("flowfields version: {}", env!("CARGO_PKG_VERSION"));

    let model = args.model.as_deref().unwrap_or(&config.device.model);
    let registry = Registry::builtin()?;

    run(&args.command, &registry, model, &mut std::io::stdout().lock())
}
