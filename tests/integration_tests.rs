use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const PLUGIN_FILE: &str = "<?php
/**
 * Plugin Name:       WP Smart Slug
 * Description:       Automatically translates Japanese URLs (slugs) to English.
 * Version:           1.0.0
 * Requires at least: 5.8
 */

define('WP_SMART_SLUG_VERSION', '1.0.0');
define('WP_SMART_SLUG_PLUGIN_DIR', plugin_dir_path( __FILE__ ));
";

fn update_version() -> Command {
    Command::new(env!("CARGO_BIN_EXE_update-version"))
}

fn plugin_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("wp-smart-slug.php");
    std::fs::write(&path, content).expect("Failed to write plugin file");
    (temp_dir, path)
}

#[test]
fn updates_header_and_constant() {
    let (_temp_dir, path) = plugin_file(PLUGIN_FILE);

    update_version()
        .arg(&path)
        .arg("2.3.1")
        .assert()
        .success()
        .stdout(
            "Updated version to 2.3.1\n\
             Line 5: * Version:           2.3.1\n\
             Line 9: define('WP_SMART_SLUG_VERSION', '2.3.1');\n",
        );

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\n * Version:           2.3.1\n"));
    assert!(written.contains("define('WP_SMART_SLUG_VERSION', '2.3.1');"));
    assert!(!written.contains("1.0.0"));
}

#[test]
fn running_twice_matches_running_once() {
    let (_temp_dir, path) = plugin_file(PLUGIN_FILE);

    update_version().arg(&path).arg("4.0.0").assert().success();
    let once = std::fs::read(&path).unwrap();
    update_version().arg(&path).arg("4.0.0").assert().success();

    assert_eq!(std::fs::read(&path).unwrap(), once);
}

#[test]
fn no_match_is_silent_success() {
    let content = "# README\r\nNothing versioned here.\r\n";
    let (_temp_dir, path) = plugin_file(content);

    update_version()
        .arg(&path)
        .arg("1.2.3")
        .assert()
        .success()
        .stdout("Updated version to 1.2.3\n");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn wrong_argument_count_prints_usage() {
    update_version()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    update_version()
        .arg("wp-smart-slug.php")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    update_version()
        .arg(temp_dir.path().join("missing.php"))
        .arg("1.0.0")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn dashed_version_is_positional() {
    let (_temp_dir, path) = plugin_file(PLUGIN_FILE);

    update_version()
        .arg(&path)
        .arg("--rc")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Updated version to --rc\n"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("define('WP_SMART_SLUG_VERSION', '--rc');"));
}

#[test]
fn indented_header_gets_fixed_format() {
    let (_temp_dir, path) = plugin_file("\t* Version: 1\n   * Version: 1\n");

    update_version().arg(&path).arg("2.0.0").assert().success();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        " * Version:           2.0.0\n * Version:           2.0.0\n"
    );
}

#[test]
fn github_actions_environment_writes_nothing_extra() {
    let (temp_dir, path) = plugin_file(PLUGIN_FILE);
    let output_path = temp_dir.path().join("github_output");
    std::fs::write(&output_path, "existing=1\n").unwrap();

    update_version()
        .env("GITHUB_ACTIONS", "true")
        .env("GITHUB_OUTPUT", &output_path)
        .arg(&path)
        .arg("2.0.0")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "existing=1\n");
}
