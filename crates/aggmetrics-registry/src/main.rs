//! aggmetrics: registration check tool.
//!
//! Loads the config, registers the pipeline counters (and the API family)
//! into the default collection under the configured namespace, then prints
//! the resulting exposition so operators can verify the exported names.
//!
//! Usage: `aggmetrics [CONFIG]` (default `aggmetrics.yaml`), see `--help`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use aggmetrics_registry::{app_state::AppState, cli::Args, config};

fn main() -> ExitCode {
    let args = Args::parse();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = args.config.display().to_string();

    let cfg = match config::load_from_file(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, code = e.class().as_str(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let namespace = cfg.metrics.namespace.clone();
    let state = match AppState::with_default_registry(cfg) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%namespace, code = e.class().as_str(), error = %e, "metrics registration failed");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = state.pipeline();
    tracing::info!(namespace = %pipeline.namespace(), "pipeline counters registered");

    match pipeline.render() {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "render failed");
            ExitCode::FAILURE
        }
    }
}
