use std::{fs, path::Path};

use toml::Value;

use crate::error::{CliError, Result};

#[derive(Debug, Clone)]
pub struct ManifestChecks {
    pub has_cdylib: bool,
    pub has_contract_feature: bool,
    pub has_release_overflow_checks: bool,
}

impl ManifestChecks {
    pub fn is_buildable(&self) -> bool {
        self.has_cdylib && self.has_contract_feature
    }
}

/// Fails unless the manifest at `project_dir` can produce a contract WASM.
pub fn ensure_contract_project(project_dir: &Path) -> Result<ManifestChecks> {
    let checks = inspect_manifest(project_dir)?;

    if !checks.is_buildable() {
        return Err(CliError::Message(format!(
            "expected a contract crate with a cdylib target and a 'contract' feature at {}",
            project_dir.display()
        )));
    }

    Ok(checks)
}

pub fn inspect_manifest(project_dir: &Path) -> Result<ManifestChecks> {
    let manifest = load_manifest(project_dir)?;

    Ok(ManifestChecks {
        has_cdylib: has_cdylib(&manifest),
        has_contract_feature: has_feature(&manifest, "contract"),
        has_release_overflow_checks: has_release_overflow_checks(&manifest),
    })
}

fn load_manifest(project_dir: &Path) -> Result<Value> {
    let content = fs::read_to_string(project_dir.join("Cargo.toml"))?;
    Ok(content.parse::<Value>()?)
}

fn has_cdylib(manifest: &Value) -> bool {
    manifest
        .get("lib")
        .and_then(|lib| lib.get("crate-type"))
        .and_then(Value::as_array)
        .is_some_and(|types| types.iter().any(|ty| ty.as_str() == Some("cdylib")))
}

fn has_feature(manifest: &Value, name: &str) -> bool {
    manifest
        .get("features")
        .and_then(Value::as_table)
        .is_some_and(|features| features.contains_key(name))
}

fn has_release_overflow_checks(manifest: &Value) -> bool {
    manifest
        .get("profile")
        .and_then(|p| p.get("release"))
        .and_then(|release| release.get("overflow-checks"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checks_for(manifest: &str) -> ManifestChecks {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("Cargo.toml"), manifest).expect("write manifest");
        inspect_manifest(dir.path()).expect("manifest should parse")
    }

    #[test]
    fn detects_contract_manifest() {
        let checks = checks_for(
            r#"
            [package]
            name = "dusk-counter"

            [features]
            contract = []

            [lib]
            crate-type = ["cdylib", "rlib"]

            [profile.release]
            overflow-checks = true
            "#,
        );

        assert!(checks.is_buildable());
        assert!(checks.has_release_overflow_checks);
    }

    #[test]
    fn plain_library_is_not_buildable() {
        let checks = checks_for("[package]\nname = \"plain\"\n");

        assert!(!checks.is_buildable());
        assert!(!checks.has_release_overflow_checks);
    }
}
