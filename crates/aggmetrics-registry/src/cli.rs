//! Command-line arguments of the `aggmetrics` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "aggmetrics")]
#[command(about = "Register the Kafka pipeline counters and print the resulting exposition")]
#[command(version)]
pub struct Args {
    /// YAML config file
    #[arg(default_value = "aggmetrics.yaml")]
    pub config: PathBuf,
}
