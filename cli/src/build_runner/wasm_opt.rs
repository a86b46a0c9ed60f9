use std::{path::Path, process::Command};

use crate::{
    config::OptLevel,
    error::{CliError, Result},
    toolchain, ui,
};

/// Optimizes `wasm_path` in place. Returns `false` when `wasm-opt` is not
/// installed.
pub fn optimize_if_available(wasm_path: &Path, level: OptLevel, verbose: bool) -> Result<bool> {
    let Some(wasm_opt) = toolchain::find_in_path("wasm-opt") else {
        return Ok(false);
    };

    let mut cmd = Command::new(&wasm_opt);
    cmd.arg(level.flag())
        .arg("--strip-debug")
        .arg(wasm_path)
        .arg("-o")
        .arg(wasm_path);

    if verbose {
        ui::status(format!("Running: {}", ui::format_command(&cmd)));
    }

    let status = cmd.status()?;
    if !status.success() {
        return Err(CliError::CommandFailed {
            program: wasm_opt.display().to_string(),
            code: status.code().unwrap_or(1),
        });
    }

    Ok(true)
}
