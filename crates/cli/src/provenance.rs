use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a run was asked to do and what it found.
pub struct Payload {
    pub params: Value,
    pub summary: Value,
}

impl Payload {
    pub fn new(params: impl Serialize) -> Result<Self> {
        Ok(Self {
            params: serde_json::to_value(params)?,
            summary: Value::Null,
        })
    }

    pub fn with_summary(mut self, summary: impl Serialize) -> Result<Self> {
        self.summary = serde_json::to_value(summary)?;
        Ok(self)
    }
}

/// Provenance block shared by sidecars and `report`.
pub fn document(params: Value, summary: Value, outputs: &[&Path]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "hullcheck_version": hullcheck::VERSION,
        "params": params,
        "summary": summary,
        "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>(),
    })
}

/// Write `<primary>.provenance.json` describing `outputs` (primary first).
#[track_caller]
pub fn write_sidecar(primary: &Path, extra: &[&Path], payload: Payload) -> Result<PathBuf> {
    let provenance_path = provenance_path(primary);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let mut outputs = vec![primary];
    outputs.extend_from_slice(extra);
    let mut doc = document(payload.params, payload.summary, &outputs);
    let callsite = Location::caller();
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("points"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
