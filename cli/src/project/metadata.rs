use std::path::PathBuf;

use cargo_metadata::{camino::Utf8PathBuf, MetadataCommand, Package};

use crate::error::{CliError, Result};
use crate::project::Project;
use crate::toolchain::WASM_TARGET;

/// Cargo-level facts about the contract crate needed to build it.
#[derive(Debug, Clone)]
pub struct ContractMetadata {
    pub manifest_path: PathBuf,
    pub crate_name: String,
    pub target_dir: PathBuf,
    pub wasm_path: PathBuf,
}

pub fn load(project: &Project) -> Result<ContractMetadata> {
    let manifest_path = project.dir.join("Cargo.toml");
    if !manifest_path.exists() {
        return Err(CliError::Message(format!(
            "missing Cargo.toml at {}",
            manifest_path.display()
        )));
    }

    let manifest_utf8 = Utf8PathBuf::from_path_buf(manifest_path.clone()).map_err(|_| {
        CliError::Message(format!(
            "manifest path contains invalid UTF-8: {}",
            manifest_path.display()
        ))
    })?;

    let metadata = MetadataCommand::new()
        .manifest_path(&manifest_path)
        .no_deps()
        .exec()?;

    let package = select_package(&metadata.packages, &manifest_utf8).ok_or_else(|| {
        CliError::Message(format!(
            "unable to resolve package metadata for {}",
            manifest_path.display()
        ))
    })?;

    let crate_name = package.name.to_string();
    let target_dir = project.artifacts_dir();
    let wasm_path = target_dir
        .join(WASM_TARGET)
        .join("release")
        .join(format!("{}.wasm", crate_name.replace('-', "_")));

    Ok(ContractMetadata {
        manifest_path,
        crate_name,
        target_dir,
        wasm_path,
    })
}

fn select_package<'a>(packages: &'a [Package], manifest_path: &Utf8PathBuf) -> Option<&'a Package> {
    packages
        .iter()
        .find(|pkg| pkg.manifest_path == *manifest_path)
}
