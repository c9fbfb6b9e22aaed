//! CLI-level tests for the non-interactive subcommands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wallet_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wallet").unwrap();
    cmd.env("WALLET_TUI_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn summary_prints_seed_totals() {
    let config_dir = TempDir::new().unwrap();

    wallet_cmd(&config_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   $1203.50"))
        .stdout(predicate::str::contains("Expenses: $66.62"))
        .stdout(predicate::str::contains("5 transactions"));
}

#[test]
fn summary_respects_configured_currency_symbol() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();

    wallet_cmd(&config_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("€1203.50"));
}

#[test]
fn config_shows_paths_and_settings() {
    let config_dir = TempDir::new().unwrap();

    wallet_cmd(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config directory:"))
        .stdout(predicate::str::contains("Theme:    Auto"))
        .stdout(predicate::str::contains("Greeting: Nelson"));
}

#[test]
fn malformed_config_is_a_config_error() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.json"), "{not json").unwrap();

    wallet_cmd(&config_dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn help_lists_subcommands() {
    let config_dir = TempDir::new().unwrap();

    wallet_cmd(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("tui"));
}
