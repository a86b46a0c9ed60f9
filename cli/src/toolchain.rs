use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
};

use crate::error::{CliError, Result};

pub const WASM_TARGET: &str = "wasm32-unknown-unknown";

#[derive(Debug, Clone)]
pub struct ToolchainStatus {
    pub channel: String,
    pub installed: bool,
    pub wasm_target: bool,
    pub rust_src: bool,
    pub wasm_opt: Option<PathBuf>,
}

pub fn cargo_toolchain_arg(channel: &str) -> String {
    format!("+{channel}")
}

pub fn inspect(channel: &str) -> ToolchainStatus {
    let installed = command_success("rustc", &[&cargo_toolchain_arg(channel), "--version"]);

    let wasm_target = command_contains(
        "rustup",
        &["target", "list", "--installed", "--toolchain", channel],
        WASM_TARGET,
    );

    let rust_src = command_contains(
        "rustup",
        &["component", "list", "--installed", "--toolchain", channel],
        "rust-src",
    );

    ToolchainStatus {
        channel: channel.to_string(),
        installed,
        wasm_target,
        rust_src,
        wasm_opt: find_in_path("wasm-opt"),
    }
}

/// Fails with an install hint when the contract cannot be built with
/// `channel`. Building the contract always needs `rust-src` for
/// `-Z build-std`.
pub fn ensure_build(channel: &str) -> Result<ToolchainStatus> {
    if find_in_path("rustup").is_none() {
        return Err(CliError::MissingTool {
            tool: "rustup",
            hint: "Install it from https://rustup.rs",
        });
    }

    let status = inspect(channel);

    if !status.installed {
        return Err(CliError::Message(format!(
            "missing Rust toolchain '{channel}'. Install with: rustup toolchain install {channel}"
        )));
    }

    if !status.wasm_target {
        return Err(CliError::Message(format!(
            "missing {WASM_TARGET} target for toolchain '{channel}'. Install with: rustup target add {WASM_TARGET} --toolchain {channel}"
        )));
    }

    if !status.rust_src {
        return Err(CliError::Message(format!(
            "missing rust-src component for toolchain '{channel}'. Install with: rustup component add rust-src --toolchain {channel}"
        )));
    }

    Ok(status)
}

/// Looks `program` up on `PATH`, returning the first executable match.
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .is_ok_and(|meta| meta.permissions().mode() & 0o111 != 0)
    }

    #[cfg(not(unix))]
    {
        true
    }
}

fn command_success(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .output()
        .is_ok_and(|output| output.status.success())
}

fn command_contains(program: &str, args: &[&str], needle: &str) -> bool {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .lines()
            .any(|line| line.contains(needle)),
        _ => false,
    }
}
