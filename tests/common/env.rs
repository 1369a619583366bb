//! Test environment for isolated cleaner runs.
//!
//! `TestEnv` owns a temp directory holding the bucket tree under `base/` and
//! the config file next to it, and runs the real binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a cleaner CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }
}

pub struct TestEnv {
    pub root: TempDir,
    cleaner_bin: PathBuf,
}

impl TestEnv {
    /// Empty environment: no base directory content, no config
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("base")).expect("Failed to create base dir");
        Self {
            root,
            cleaner_bin: PathBuf::from(env!("CARGO_BIN_EXE_cleaner")),
        }
    }

    /// Seeded buckets plus the matching config
    pub fn seeded() -> Self {
        let env = Self::new();
        for rel in super::fixtures::SEED {
            env.touch(rel);
        }
        env.write_config(super::fixtures::SEED_BUCKETS);
        env
    }

    pub fn base_dir(&self) -> PathBuf {
        self.root.path().join("base")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.toml")
    }

    /// Path relative to the base directory
    pub fn base_path(&self, relative: &str) -> PathBuf {
        self.base_dir().join(relative)
    }

    /// Create an empty file under the base directory
    pub fn touch(&self, relative: &str) {
        let path = self.base_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, "").expect("Failed to write file");
    }

    /// Write `config.toml` pointing at this env's base directory.
    ///
    /// `buckets` is the `[[bucket]]` section, appended after the header keys.
    pub fn write_config(&self, buckets: &str) {
        self.write_config_with_schedule("@weekly", buckets);
    }

    pub fn write_config_with_schedule(&self, schedule: &str, buckets: &str) {
        let content = format!(
            "base-directory = '{}'\nschedule = '{}'\n\n{}",
            self.base_dir().display(),
            schedule,
            buckets
        );
        self.write_raw_config(&content);
    }

    pub fn write_raw_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Run cleaner with `-c <config>` prepended
    pub fn run(&self, args: &[&str]) -> TestResult {
        let config = self.config_path();
        let mut full: Vec<&str> = vec!["-c", config.to_str().expect("utf-8 temp path")];
        full.extend_from_slice(args);
        self.run_raw(&full, &[])
    }

    /// Run cleaner with exactly `args` and extra env vars
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.cleaner_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("CLEANER_BASE_DIRECTORY")
            .env_remove("CLEANER_SCHEDULE")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute cleaner");
        output_to_result(output)
    }

    /// Files remaining under the base directory, relative and sorted
    pub fn remaining_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        list_files(&self.base_dir(), &self.base_dir(), &mut files);
        files.sort();
        files
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn list_files(base: &Path, dir: &Path, files: &mut Vec<String>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                list_files(base, &path, files);
            } else if let Ok(rel) = path.strip_prefix(base) {
                files.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
