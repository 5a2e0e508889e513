//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside its own temporary directory with a private
//! user configuration directory, and with the `AMIPATH_*` environment
//! variables removed, so the developer's own setup never leaks in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the CLI or the library.
const AMIPATH_ENV_VARS: &[&str] = &[
    "AMIPATH_CONFIG",
    "AMIPATH_CONFIG_DIR",
    "AMIPATH_CUR_DIR",
    "AMIPATH_CMD_PATH",
    "AMIPATH_VOLUMES",
    "AMIPATH_ASSIGNS",
];

/// A workbench-like configuration used by most resolving tests.
#[allow(dead_code)]
pub const WORKBENCH_CONFIG: &str = r"
volumes:
  sys: /amiga/sys
  work: /amiga/work
assigns:
  c: sys:c
  s: sys:s
  libs: [sys:libs, work:libs]
  devs: s:devs
paths:
  cur_dir: work:src
  cmd_path: ['c:', work:bin]
";

/// Isolated test environment.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as the working directory.
    pub temp_path: PathBuf,
    /// User configuration directory passed via `--config-dir`.
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("user");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Create a test environment whose project file holds the workbench configuration.
    pub fn workbench() -> Self {
        let env = Self::new();
        env.write_config("amipath.yaml", WORKBENCH_CONFIG);
        env
    }

    /// A command builder with the binary only and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("amipath").expect("Failed to find amipath binary");
        for var in AMIPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// A command builder with the private user configuration directory set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory and return its path.
    pub fn write_config(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        self.write_config("user/config.yaml", content)
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run amipath");
        assert!(
            output.status.success(),
            "amipath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }

    /// Run a command and return its stdout lines, asserting success.
    pub fn lines_of(&self, args: &[&str]) -> Vec<String> {
        self.stdout_of(args).lines().map(String::from).collect()
    }
}
