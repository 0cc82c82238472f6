//! Shared testing utilities for dashvars CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DASHBOARD: &str = "src/dbsql_metrics.lvdash.json";
pub const TEMPLATE: &str = "src/dbsql_metrics_template.lvdash.json";

pub const BUNDLE_YML: &str = r#"
bundle:
  name: test_bundle
targets:
  dev:
    variables:
      catalog:
        default: "test_catalog"
      schema:
        default: "test_schema"
  prod:
    variables:
      catalog:
        default: "prod_catalog"
      schema:
        default: "prod_schema"
"#;

/// Dashboard with one catalog and one schema parameter.
pub fn sample_dashboard() -> Value {
    json!({
        "datasets": [{
            "name": "usage",
            "displayName": "Usage",
            "parameters": [
                {"displayName": "catalog", "keyword": "catalog", "dataType": "STRING",
                 "defaultSelection": {"values": {"dataType": "STRING", "values": [{"value": "old_catalog"}]}}},
                {"displayName": "schema", "keyword": "schema", "dataType": "STRING",
                 "defaultSelection": {"values": {"dataType": "STRING", "values": [{"value": "old_schema"}]}}}
            ]
        }],
        "pages": [{"name": "overview", "displayName": "Overview"}]
    })
}

/// JSON printed by `bundle validate -o json` for the given values.
pub fn validate_output(catalog: &str, schema: &str) -> String {
    json!({
        "bundle": {"name": "test_bundle", "target": "dev"},
        "variables": {
            "catalog": {"default": catalog, "value": catalog},
            "schema": {"default": schema, "value": schema}
        }
    })
    .to_string()
}

/// Testing harness providing an isolated bundle project and a fake bundle CLI.
pub struct TestContext {
    root: TempDir,
    project: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    /// Create a project containing `databricks.yml` and the sample dashboard.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_bundle(BUNDLE_YML);
        ctx.write_dashboard(&sample_dashboard());
        ctx
    }

    /// Create an empty project directory with a `src/` folder.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project = root.path().join("project");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(project.join("src")).expect("Failed to create project directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        Self { root, project, bin_dir }
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write fixture");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    pub fn write_bundle(&self, content: &str) {
        self.write("databricks.yml", content);
    }

    pub fn write_dashboard(&self, document: &Value) {
        self.write(DASHBOARD, &serde_json::to_string_pretty(document).unwrap());
    }

    pub fn read_dashboard(&self) -> Value {
        serde_json::from_str(&self.read(DASHBOARD)).expect("Dashboard is not valid JSON")
    }

    /// Install a fake `databricks` executable that prints `stdout`/`stderr` and exits with `code`.
    pub fn fake_cli(&self, stdout: &str, stderr: &str, code: i32) {
        self.fake_cli_as("databricks", stdout, stderr, code);
    }

    /// Install the fake CLI under `name` in the fake bin directory.
    pub fn fake_cli_as(&self, name: &str, stdout: &str, stderr: &str, code: i32) {
        let stdout_file = self.root.path().join("cli_stdout");
        let stderr_file = self.root.path().join("cli_stderr");
        fs::write(&stdout_file, stdout).unwrap();
        fs::write(&stderr_file, stderr).unwrap();

        let script = format!(
            "#!/bin/sh\nPATH=/usr/bin:/bin:$PATH\necho \"$@\" >> \"{log}\"\npwd >> \"{log}\"\ncat \"{out}\"\ncat \"{err}\" >&2\nexit {code}\n",
            log = self.cli_log_path().display(),
            out = stdout_file.display(),
            err = stderr_file.display(),
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake databricks");
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    /// Fake CLI that validates successfully with the given variable values.
    pub fn fake_cli_success(&self, catalog: &str, schema: &str) {
        self.fake_cli(&validate_output(catalog, schema), "", 0);
    }

    pub fn fake_cli_path(&self, name: &str) -> PathBuf {
        self.bin_dir.join(name)
    }

    fn cli_log_path(&self) -> PathBuf {
        self.root.path().join("databricks.log")
    }

    /// Arguments and working directory of every fake CLI invocation.
    pub fn cli_log(&self) -> String {
        fs::read_to_string(self.cli_log_path()).unwrap_or_default()
    }

    /// Build a command running `dashvars` in the project root with the fake CLI first on PATH.
    pub fn cli(&self) -> Command {
        self.cli_in(&self.project)
    }

    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let path = match env::var_os("PATH") {
            Some(system) => {
                let mut paths = vec![self.bin_dir.clone()];
                paths.extend(env::split_paths(&system));
                env::join_paths(paths).expect("Failed to build PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };

        let mut cmd = Command::cargo_bin("dashvars").expect("Failed to locate dashvars binary");
        cmd.current_dir(dir.as_ref()).env("PATH", path).env_remove("DASHVARS_LOG");
        cmd
    }

    /// Like `cli`, but with only the (possibly empty) fake bin directory on PATH.
    pub fn cli_isolated(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("PATH", &self.bin_dir);
        cmd
    }
}
