pub mod wasm_opt;

#[cfg(feature = "verify")]
pub mod verify;

use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    error::{CliError, Result},
    project::metadata::ContractMetadata,
    toolchain::{self, WASM_TARGET},
    ui,
};

const CONTRACT_FEATURE: &str = "contract";
const STACK_SIZE: u32 = 65_536;

/// Builds the contract WASM with `channel` and returns the artifact path.
pub fn build(contract: &ContractMetadata, channel: &str, verbose: bool) -> Result<PathBuf> {
    let mut cmd = Command::new("cargo");

    cmd.arg(toolchain::cargo_toolchain_arg(channel))
        .arg("build")
        .arg("--release")
        .arg("--target")
        .arg(WASM_TARGET)
        .arg("--features")
        .arg(CONTRACT_FEATURE)
        .arg("--manifest-path")
        .arg(&contract.manifest_path)
        .arg("--color=always")
        .arg("-Z")
        .arg("build-std=core,alloc")
        .env("CARGO_TARGET_DIR", &contract.target_dir)
        .env("RUSTFLAGS", compose_rustflags(env::var("RUSTFLAGS").ok()))
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .stdin(Stdio::inherit());

    if let Some(dir) = contract.manifest_path.parent() {
        cmd.current_dir(dir);
    }

    if verbose {
        ui::status(format!("Running: {}", ui::format_command(&cmd)));
    }

    let status = cmd.status()?;
    if !status.success() {
        return Err(CliError::CommandFailed {
            program: "cargo build".to_string(),
            code: status.code().unwrap_or(1),
        });
    }

    ensure_file_exists(&contract.wasm_path)?;
    Ok(contract.wasm_path.clone())
}

fn compose_rustflags(existing: Option<String>) -> String {
    let mut parts: Vec<String> = existing
        .map(|flags| flags.split_whitespace().map(ToString::to_string).collect())
        .unwrap_or_default();

    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            parts.push("--remap-path-prefix".to_string());
            parts.push(format!("{home}="));
        }
    }

    parts.push("-C".to_string());
    parts.push(format!("link-args=-zstack-size={STACK_SIZE}"));

    parts.join(" ")
}

fn ensure_file_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::Message(format!(
            "expected build artifact not found: {}",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rustflags_keep_existing_and_set_stack_size() {
        let flags = compose_rustflags(Some("-C opt-level=z".to_string()));

        assert!(flags.starts_with("-C opt-level=z"));
        assert!(flags.ends_with("-C link-args=-zstack-size=65536"));
    }
}
