//! Test environment for isolated dirpress runs.
//!
//! Provides `TestEnv` - a temp directory that serves as the working
//! directory for the binary, plus helpers to feed the confirmation prompt.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the dirpress binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment rooted in a temp directory
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_dirpress")),
        }
    }

    /// Environment with `data/file.txt` already in place
    pub fn with_data_dir() -> Self {
        let env = Self::new();
        env.write_file("data/file.txt", "hello dirpress\n");
        env
    }

    /// Get path relative to the root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Run with no input on stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, "")
    }

    /// Run and answer the confirmation prompt with `input`
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with_env(args, input, &[])
    }

    pub fn run_with_env(&self, args: &[&str], input: &str, env_vars: &[(&str, &Path)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute dirpress");
        if let Some(mut stdin) = child.stdin.take() {
            // The binary may exit before reading
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for dirpress");

        output_to_result(output)
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

/// Whether `program` can be launched from this test environment
pub fn tool_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// True (and logs a skip notice) unless `tar` and `lz4` are both installed
pub fn tools_missing() -> bool {
    let missing = !tool_available("tar") || !tool_available("lz4");
    if missing {
        eprintln!("skipping: tar and lz4 are required");
    }
    missing
}
