//! Common test utilities for integration tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use amipath::{NameTable, PathEnv};

/// Names of every environment variable the configuration reads.
#[allow(dead_code)]
pub const AMIPATH_ENV_VARS: &[&str] = &[
    "AMIPATH_CUR_DIR",
    "AMIPATH_CMD_PATH",
    "AMIPATH_VOLUMES",
    "AMIPATH_ASSIGNS",
];

/// Writes `content` to `dir/filename` and returns the file path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    #[allow(dead_code)]
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    #[allow(dead_code)]
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears all `AMIPATH_*` configuration variables for the guard's lifetime.
#[allow(dead_code)]
pub fn clear_amipath_env_vars() -> Vec<EnvGuard> {
    AMIPATH_ENV_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}

/// A classic Workbench-like layout.
///
/// Volumes `sys` and `work`; `c` and `s` point into `sys`, `libs` is a
/// multi-assign over both volumes, `devs` chains through `sys`, and `tools`
/// chains through the multi-assign `libs`.
#[allow(dead_code)]
pub fn workbench_table() -> NameTable {
    NameTable::builder()
        .volume("sys", "/amiga/sys")
        .volume("work", "/amiga/work")
        .assign("c", ["sys:c"])
        .assign("s", ["sys:s"])
        .assign("libs", ["sys:libs", "work:libs"])
        .assign("devs", ["s:devs"])
        .assign("tools", ["libs:tools", "work:tools"])
        .build()
        .unwrap()
}

/// [`workbench_table`] with current directory `work:src` and command path
/// `c:`, `work:bin`.
#[allow(dead_code)]
pub fn workbench_env() -> Arc<PathEnv> {
    Arc::new(
        PathEnv::new(Arc::new(workbench_table()))
            .with_cur_dir("work:src".into())
            .unwrap()
            .with_cmd_paths(vec!["c:".into(), "work:bin".into()])
            .unwrap(),
    )
}
