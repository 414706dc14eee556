//! Tests for configuration loading, `validate` and `completions`.

mod common;

use common::{s, TestEnv};
use predicates::prelude::*;

#[test]
fn test_config_file_sets_platform() {
    let env = TestEnv::new();
    env.write_config("platform: windows\n");
    env.command()
        .args(["normal", "a/b"])
        .assert()
        .success()
        .stdout("a\\b\n");
}

#[test]
fn test_flag_beats_config_file() {
    let env = TestEnv::new();
    env.write_config("platform: windows\n");
    env.command()
        .args(["--platform", "posix", "normal", "a\\b"])
        .assert()
        .success()
        .stdout("a/b\n");
}

#[test]
fn test_unknown_config_key_is_config_error() {
    let env = TestEnv::new();
    env.write_config("port: 8080\n");
    env.command()
        .args(["normal", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_env_depth_is_config_error() {
    let env = TestEnv::new();
    env.command()
        .env("CXPATH_MAX_SYMLINK_DEPTH", "lots")
        .args(["normal", "a"])
        .assert()
        .code(7);
}

#[test]
fn test_validate_good_file() {
    let env = TestEnv::new();
    let file = env.root.join("good.yaml");
    std::fs::write(&file, "platform: posix\nmax_symlink_depth: 16\nlog_mode: verbose\n").unwrap();

    env.command()
        .args(["validate", &s(&file)])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_validate_out_of_range() {
    let env = TestEnv::new();
    let file = env.root.join("bad.yaml");
    std::fs::write(&file, "max_symlink_depth: 0\n").unwrap();

    env.command()
        .args(["validate", &s(&file)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_symlink_depth"));
}

#[test]
fn test_validate_bad_log_mode() {
    let env = TestEnv::new();
    let file = env.root.join("bad.yaml");
    std::fs::write(&file, "log_mode: chatty\n").unwrap();

    env.command().args(["validate", &s(&file)]).assert().code(1);
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();
    env.command()
        .args(["validate", "nowhere.yaml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cxpath"));
}
