use std::fs;

use crate::{
    build_runner::{self, wasm_opt},
    cli::ProjectOptions,
    error::Result,
    project::{detect, metadata, Project},
    toolchain, ui,
};

pub fn run(args: ProjectOptions) -> Result<()> {
    let project = Project::load(&args.path)?;
    let checks = detect::ensure_contract_project(&project.dir)?;
    if !checks.has_release_overflow_checks {
        ui::warn("profile.release.overflow-checks is not enabled");
    }

    let build = &project.config.build;
    toolchain::ensure_build(&build.toolchain)?;

    let contract = metadata::load(&project)?;
    ui::status(format!(
        "Building contract WASM ({}) with {}",
        contract.crate_name, build.toolchain
    ));

    let wasm_path = build_runner::build(&contract, &build.toolchain, args.verbose)?;

    if build.optimize {
        if !wasm_opt::optimize_if_available(&wasm_path, build.opt_level, args.verbose)? {
            ui::warn("wasm-opt not found, skipping optimization");
        }
    } else if args.verbose {
        ui::status("Optimization disabled in Forge.toml");
    }

    #[cfg(feature = "verify")]
    {
        let exports = build_runner::verify::check_exports(&wasm_path)?;
        ui::success(format!("All {exports} schema functions are exported"));
    }

    let bytes = fs::read(&wasm_path)?;
    let hash = blake3::hash(&bytes).to_hex();

    ui::success(format!(
        "contract wasm: {} ({})",
        wasm_path.display(),
        ui::format_bytes(bytes.len() as u64)
    ));
    println!("contract_wasm: {}", wasm_path.display());
    println!("contract_blake3: {hash}");
    Ok(())
}
