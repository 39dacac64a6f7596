//! Tests for argument parsing.

use super::parse;
use crate::cli::Cli;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_no_arguments() {
    let cli = parse(&["imgopt"]);
    assert!(cli.output_dir.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.strict);
}

#[test]
fn cli_parse_output_dir() {
    let cli = parse(&["imgopt", "--output-dir", "/tmp/img"]);
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("/tmp/img")));
}

#[test]
fn cli_parse_config_and_strict() {
    let cli = parse(&["imgopt", "--config", "site.toml", "--strict"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("site.toml")));
    assert!(cli.strict);
}

#[test]
fn cli_rejects_positional_arguments() {
    assert!(Cli::try_parse_from(["imgopt", "photo-1"]).is_err());
}

#[test]
fn cli_run_with_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let cli = parse(&["imgopt", "--config", missing.to_str().unwrap()]);
    let err = cli.run().unwrap_err();
    assert!(format!("{:#}", err).contains("read config"));
}

/// Config pointing at a closed local port so every fetch fails fast.
fn unreachable_config(dir: &Path, base_url: &str) -> String {
    let path = dir.join("imgopt.toml");
    std::fs::write(
        &path,
        format!(
            "base_url = \"{}\"\n\n[http]\ntimeout_secs = 2\nconnect_timeout_secs = 1\n",
            base_url
        ),
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn cli_run_partial_failure_exits_ok_without_strict() {
    let dir = tempfile::tempdir().unwrap();
    let config = unreachable_config(dir.path(), "http://127.0.0.1:9/");
    let out = dir.path().join("out");
    let cli = parse(&[
        "imgopt",
        "--config",
        &config,
        "--output-dir",
        out.to_str().unwrap(),
    ]);
    cli.run().unwrap();
    assert!(out.is_dir());
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn cli_run_partial_failure_errors_with_strict() {
    let dir = tempfile::tempdir().unwrap();
    let config = unreachable_config(dir.path(), "http://127.0.0.1:9/");
    let out = dir.path().join("out");
    let cli = parse(&[
        "imgopt",
        "--config",
        &config,
        "--output-dir",
        out.to_str().unwrap(),
        "--strict",
    ]);
    let msg = format!("{:#}", cli.run().unwrap_err());
    assert!(msg.contains("29 of 29 images failed"), "{}", msg);
    assert!(msg.contains("photo-1503387762-592deb58ef4e"));
}

#[test]
fn cli_run_invalid_base_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = unreachable_config(dir.path(), "not a url");
    let out = dir.path().join("out");
    let cli = parse(&[
        "imgopt",
        "--config",
        &config,
        "--output-dir",
        out.to_str().unwrap(),
    ]);
    let msg = format!("{:#}", cli.run().unwrap_err());
    assert!(msg.contains("invalid base_url"), "{}", msg);
    assert!(!out.exists());
}

#[test]
fn cli_run_uncreatable_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = unreachable_config(dir.path(), "http://127.0.0.1:9/");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file, not a directory").unwrap();
    let out = blocker.join("images");
    let cli = parse(&[
        "imgopt",
        "--config",
        &config,
        "--output-dir",
        out.to_str().unwrap(),
    ]);
    let msg = format!("{:#}", cli.run().unwrap_err());
    assert!(msg.contains("create output directory"), "{}", msg);
}
