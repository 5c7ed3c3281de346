//! Integration tests for the greeter-sessions binary

use super::common::fixtures::{toml_paths, write_config, IconDir, SessionDir};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn greeter_sessions() -> Command {
    Command::cargo_bin("greeter-sessions").expect("binary should build")
}

/// `icon` prints the badge from the first directory that has it
#[test]
fn test_icon_command_prefers_first_match() {
    let a = IconDir::new();
    let b = IconDir::with_badges(&["ubuntu"]);

    greeter_sessions()
        .arg("icon")
        .arg("Ubuntu")
        .arg("--search-dir")
        .arg(&a.path)
        .arg("--search-dir")
        .arg(&b.path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            b.badge("ubuntu").display().to_string(),
        ));
}

/// `icon` falls back when the configured list is empty
#[test]
fn test_icon_command_fallback() {
    let config_dir = TempDir::new().unwrap();
    let config = write_config(config_dir.path(), "[icons]\nsearch_dirs = []\n");

    greeter_sessions()
        .arg("--config")
        .arg(&config)
        .args(["icon", "Gnome"])
        .assert()
        .success()
        .stdout("./graphics/session_icons/unknown_badge.png\n");
}

/// `--config-dir` reads config.toml from the given directory
#[test]
fn test_config_dir_selects_config_file() {
    let icons = IconDir::with_badges(&["sway"]);
    let config_dir = TempDir::new().unwrap();
    write_config(
        config_dir.path(),
        &format!("[icons]\nsearch_dirs = {}\n", toml_paths(&[icons.path.as_path()])),
    );

    greeter_sessions()
        .arg("--config-dir")
        .arg(config_dir.path())
        .args(["icon", "Sway"])
        .assert()
        .success()
        .stdout(format!("{}\n", icons.badge("sway").display()));
}

/// A `--config-dir` without config.toml runs on the defaults
#[test]
fn test_config_dir_without_file_uses_defaults() {
    let config_dir = TempDir::new().unwrap();

    greeter_sessions()
        .arg("--config-dir")
        .arg(config_dir.path())
        .arg("roles")
        .assert()
        .success()
        .stdout(predicate::str::contains("258\ticon_url"));
}

/// `roles` includes the icon role
#[test]
fn test_roles_command() {
    let config_dir = TempDir::new().unwrap();
    let config = write_config(config_dir.path(), "");

    greeter_sessions()
        .arg("--config")
        .arg(&config)
        .arg("roles")
        .assert()
        .success()
        .stdout(predicate::str::contains("258\ticon_url"))
        .stdout(predicate::str::contains("0\tdisplay"));
}

/// `list --json` emits sessions in display order with their badges
#[test]
fn test_list_json() {
    let sessions = SessionDir::new();
    sessions.add_session("xfce", "Xfce Session");
    sessions.add_session("awesome", "awesome");
    let icons = IconDir::with_badges(&["awesome"]);
    let config_dir = TempDir::new().unwrap();
    let config = write_config(
        config_dir.path(),
        &format!(
            "[icons]\nsearch_dirs = {}\n\n[sessions]\nx_dirs = {}\nwayland_dirs = []\n",
            toml_paths(&[icons.path.as_path()]),
            toml_paths(&[sessions.path.as_path()]),
        ),
    );

    let output = greeter_sessions()
        .arg("--config")
        .arg(&config)
        .args(["list", "--json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["display"], "awesome");
    assert_eq!(rows[0]["key"], "awesome");
    assert_eq!(
        rows[0]["icon_url"],
        icons.badge("awesome").display().to_string()
    );
    assert_eq!(rows[1]["display"], "Xfce Session");
    assert_eq!(
        rows[1]["icon_url"],
        "./graphics/session_icons/unknown_badge.png"
    );
}

/// A broken config file is an error when passed explicitly
#[test]
fn test_bad_config_fails() {
    let config_dir = TempDir::new().unwrap();
    let config = write_config(config_dir.path(), "[icons\n");

    greeter_sessions()
        .arg("--config")
        .arg(&config)
        .arg("roles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
