//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `--config-dir` pointed at an isolated directory
//! and with the `CXPATH_*` environment variables cleared, so the user's own
//! configuration never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 4] = [
    "CXPATH_PLATFORM",
    "CXPATH_MAX_SYMLINK_DEPTH",
    "CXPATH_LOG_MODE",
    "CXPATH_CONFIG_DIR",
];

/// Isolated environment with a scratch tree and a config directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the scratch tree.
    pub root: PathBuf,
    /// Directory passed as `--config-dir`.
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = std::fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize");
        let config_dir = root.join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            root,
            config_dir,
        }
    }

    /// The binary with a clean environment and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cxpath").expect("Failed to find cxpath binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.root);
        cmd
    }

    /// The binary with `--config-dir` set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Like [`TestEnv::command`], forcing the POSIX grammar.
    pub fn posix(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--platform", "posix"]);
        cmd
    }

    /// Writes `config.yaml` into the config directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    pub fn file(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent");
        }
        std::fs::write(&path, b"").expect("Failed to create test file");
        path
    }

    #[cfg(unix)]
    pub fn symlink(&self, name: &str, target: &str) -> PathBuf {
        let path = self.root.join(name);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

/// Lossy display form of a test path.
pub fn s(path: &Path) -> String {
    path.display().to_string()
}
