use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn snapline_cmd() -> Command {
    Command::cargo_bin("snapline").expect("binary exists")
}

#[test]
fn snapline_help_prints_about() {
    snapline_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Snapping segment and polyline drawing overlay for Wayland",
        ))
        .stdout(predicate::str::contains("--snap-threshold"));
}

#[test]
fn no_flags_prints_usage() {
    snapline_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("snapline --active"));
}

#[test]
fn active_mode_requires_wayland_env() {
    snapline_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--active")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}

#[test]
fn snap_threshold_must_be_numeric() {
    snapline_cmd()
        .args(["--snap-threshold", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("snapline").join("config.toml");

    snapline_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[snap]"));
    assert!(written.contains("[keybindings]"));

    snapline_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn schema_dump_describes_snap_section() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"snap\""))
        .stdout(predicate::str::contains("threshold"));
}
