//! Isolated workspace for running the `pbxedit` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a pbxedit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON, one value per line
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})\n{}", self.stdout))
            })
            .collect()
    }
}

/// Temp directory with one project bundle.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Workspace whose `App.xcodeproj/project.pbxproj` holds `manifest`.
    pub fn with_manifest(manifest: &str) -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let env = Self { root };
        env.write("App.xcodeproj/project.pbxproj", manifest);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn bundle(&self) -> PathBuf {
        self.path("App.xcodeproj")
    }

    pub fn bundle_arg(&self) -> String {
        self.bundle().display().to_string()
    }

    pub fn manifest_text(&self) -> String {
        std::fs::read_to_string(self.path("App.xcodeproj/project.pbxproj"))
            .expect("read manifest")
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write file");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_in(self.root.path(), args, env_vars)
    }
}

/// Run the binary in `cwd` with a plain, predictable terminal.
pub fn run_in(cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pbxedit"));
    cmd.current_dir(cwd)
        .args(args)
        .env("NO_COLOR", "1")
        .env("LANG", "en_US.UTF-8")
        .env("TERM", "xterm");
    for key in [
        "PBXEDIT_TARGET",
        "PBXEDIT_GROUP",
        "PBXEDIT_ANCHOR",
        "PBXEDIT_DUPLICATE_CHECK",
        "PBXEDIT_VERBOSITY",
        "LC_ALL",
        "LC_CTYPE",
    ] {
        cmd.env_remove(key);
    }
    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("run pbxedit");
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Lines of `text` containing `needle`.
pub fn lines_with<'a>(text: &'a str, needle: &str) -> Vec<&'a str> {
    text.lines().filter(|l| l.contains(needle)).collect()
}
