#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use aggmetrics_registry::cli::Args;
use clap::error::ErrorKind;
use clap::Parser;

#[test]
fn config_defaults_to_local_yaml() {
    let args = Args::try_parse_from(["aggmetrics"]).unwrap();
    assert_eq!(args.config, Path::new("aggmetrics.yaml"));
}

#[test]
fn config_path_is_positional() {
    let args = Args::try_parse_from(["aggmetrics", "/etc/aggmetrics/prod.yaml"]).unwrap();
    assert_eq!(args.config, Path::new("/etc/aggmetrics/prod.yaml"));
}

#[test]
fn help_is_not_taken_as_a_config_path() {
    let err = Args::try_parse_from(["aggmetrics", "--help"]).expect_err("help exits");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn unknown_flag_is_rejected() {
    let err = Args::try_parse_from(["aggmetrics", "--namespace", "ns"]).expect_err("unknown flag");
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}
