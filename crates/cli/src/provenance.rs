use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Clone, Debug, Serialize)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

/// Provenance document: which build produced which outputs from which parameters.
#[derive(Clone, Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
    pub tag: Option<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    /// Document for the current build with no parameters or outputs.
    pub fn for_build(tag: Option<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: gridpoly::VERSION,
            callsite: None,
            tag,
            params: Value::Null,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    tag: Option<String>,
    params: Value,
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let caller = Location::caller();
    let doc = Provenance {
        callsite: Some(Callsite {
            file: caller.file().to_string(),
            line: caller.line(),
        }),
        params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
        ..Provenance::for_build(tag)
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        assert_eq!(
            provenance_path(Path::new("/tmp/runs/polys.csv")),
            Path::new("/tmp/runs/polys.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("polys")),
            Path::new("polys.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("polys.json");
        fs::write(&artifact, "[]").unwrap();
        let prov = write_sidecar(
            &artifact,
            Some("trial".into()),
            json!({"size": 3, "depth": 1, "vertices": 3}),
        )
        .unwrap();
        assert_eq!(prov, dir.path().join("polys.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["size"], 3);
        assert_eq!(parsed["tag"], "trial");
        assert_eq!(parsed["version"], gridpoly::VERSION);
        assert!(parsed["callsite"]["file"]
            .as_str()
            .unwrap()
            .ends_with("provenance.rs"));
    }

    #[test]
    fn build_report_has_no_callsite() {
        let doc = serde_json::to_value(Provenance::for_build(None)).unwrap();
        assert!(doc.get("callsite").is_none());
        assert_eq!(doc["tag"], Value::Null);
        assert_eq!(doc["outputs"], json!([]));
    }
}
