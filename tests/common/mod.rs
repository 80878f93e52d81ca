//! Shared helpers for CLI integration tests
//!
//! Each test gets a throwaway form project and a scripted stand-in for esbuild that
//! mimics its command line contract: it reads the entry point, honors `--outfile`
//! and `--banner:js`, writes a sibling `.map`, and reports errors and warnings on
//! stderr in esbuild's format. Entry files containing `SYNTAX_ERROR` fail,
//! entry files containing `WARN_ME` produce a warning.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const INTAKE_FORM: &str = include_str!("../fixtures/forms/intake.tsx");
pub const FIELD: &str = include_str!("../fixtures/forms/Field.tsx");
pub const BROKEN_FORM: &str = include_str!("../fixtures/forms/broken.tsx");
pub const NOISY_FORM: &str = include_str!("../fixtures/forms/noisy.tsx");

const FAKE_ESBUILD: &str = r#"#!/bin/sh
out=""
banner=""
entry=""
for arg in "$@"; do
  case "$arg" in
    --outfile=*) out="${arg#--outfile=}" ;;
    --banner:js=*) banner="${arg#--banner:js=}" ;;
    --*) ;;
    *) entry="$arg" ;;
  esac
done

if [ -n "$FAKE_ESBUILD_LOG" ]; then
  printf '%s\n' "$@" > "$FAKE_ESBUILD_LOG"
fi

if [ ! -r "$entry" ]; then
  printf '✘ [ERROR] Could not resolve "%s"\n\n1 error\n' "$entry" >&2
  exit 1
fi

if grep -q SYNTAX_ERROR "$entry"; then
  printf '✘ [ERROR] Expected ";" but found "}"\n\n    %s:6:0:\n      6 │ }\n        ╵ ^\n\n1 error\n' "$entry" >&2
  exit 1
fi

if grep -q WARN_ME "$entry"; then
  printf '▲ [WARNING] Comparison using the "===" operator here is always false [equals-nan]\n\n    %s:5:18:\n\n1 warning\n' "$entry" >&2
fi

name=$(basename "$out")
{
  printf '%s\n' "$banner"
  printf 'var g=(()=>{'
  tr -d '\n' < "$entry"
  printf '})();\n//# sourceMappingURL=%s.map\n' "$name"
} > "$out"
printf '{"version":3,"sources":["../src/index.tsx"],"sourcesContent":[],"mappings":"AAAA"}' > "$out.map"
"#;

/// A temporary form project with a stand-in esbuild.
pub struct TestProject {
    dir: TempDir,
    engine: PathBuf,
    engine_log: PathBuf,
}

impl TestProject {
    /// Project with `src/index.tsx` set to the intake form.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let engine = dir.path().join("bin/esbuild");
        std::fs::create_dir_all(engine.parent().unwrap()).unwrap();
        std::fs::write(&engine, FAKE_ESBUILD).unwrap();
        make_executable(&engine);

        let engine_log = dir.path().join("bin/esbuild.log");
        let project = Self {
            dir,
            engine,
            engine_log,
        };
        project.write("src/index.tsx", INTAKE_FORM);
        project.write("src/Field.tsx", FIELD);
        project
    }

    /// Project without a stand-in engine, for running the real esbuild.
    pub fn bare() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let engine = PathBuf::new();
        let engine_log = dir.path().join("esbuild.log");
        let project = Self {
            dir,
            engine,
            engine_log,
        };
        project.write("src/index.tsx", INTAKE_FORM);
        project.write("src/Field.tsx", FIELD);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel))
            .unwrap_or_else(|e| panic!("reading {rel}: {e}"))
    }

    pub fn read_bytes(&self, rel: &str) -> Vec<u8> {
        std::fs::read(self.path().join(rel)).unwrap_or_else(|e| panic!("reading {rel}: {e}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path().join(rel).exists()
    }

    pub fn manifest(&self, rel: &str) -> Value {
        serde_json::from_str(&self.read(rel)).expect("manifest is JSON")
    }

    /// Arguments the stand-in engine received on its last run.
    pub fn engine_args(&self) -> String {
        std::fs::read_to_string(&self.engine_log).unwrap_or_default()
    }

    /// Staging directories left behind in `rel`.
    pub fn staging_leftovers(&self, rel: &str) -> Vec<String> {
        match std::fs::read_dir(self.path().join(rel)) {
            Ok(entries) => entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .filter(|n| n.starts_with(".form_bundler-"))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// The bundler binary, run inside the project with the stand-in engine.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("form_bundler").expect("binary built");
        cmd.current_dir(self.path())
            .env_remove("npm_package_version")
            .env_remove("FORM_BUNDLER_ESBUILD")
            .env_remove("RUST_LOG")
            .env("FAKE_ESBUILD_LOG", &self.engine_log);
        if !self.engine.as_os_str().is_empty() {
            cmd.env("FORM_BUNDLER_ESBUILD", &self.engine);
        }
        cmd
    }

    /// Like [`cmd`](Self::cmd), for tests that need control over the child's pipes.
    pub fn std_cmd(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_form_bundler"));
        cmd.current_dir(self.path())
            .env_remove("npm_package_version")
            .env_remove("RUST_LOG")
            .env("FORM_BUNDLER_ESBUILD", &self.engine)
            .env("FAKE_ESBUILD_LOG", &self.engine_log);
        cmd
    }
}

/// Loads `artifact` into a page that only has stub `React`/`ReactDOM` globals and
/// evaluates `expression` after it, returning the JSON result. `None` when node is
/// not installed.
pub fn run_in_host_page(artifact: &Path, expression: &str) -> Option<Value> {
    let node = which::which("node").ok()?;
    let harness = artifact.with_file_name("host-page.js");
    std::fs::write(&harness, HOST_PAGE).unwrap();

    let output = std::process::Command::new(node)
        .arg(&harness)
        .arg(artifact)
        .arg(expression)
        .output()
        .expect("run node");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    std::fs::remove_file(&harness).ok();
    Some(serde_json::from_slice(&output.stdout).expect("host page result is JSON"))
}

const HOST_PAGE: &str = r#"
const vm = require("vm");
const fs = require("fs");
const [artifact, expression] = process.argv.slice(2);
const React = {
  Fragment: "fragment",
  createElement(type, props, ...children) { return { type, props, children }; },
  useState(initial) { return [initial, () => {}]; },
};
const ReactDOM = { createRoot() { return "root"; } };
const page = vm.createContext({ React, ReactDOM, console });
vm.runInContext(fs.readFileSync(artifact, "utf8"), page);
process.stdout.write(JSON.stringify(vm.runInContext(expression, page)));
"#;

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
