use crate::{
    cli::ProjectOptions,
    config::CONFIG_FILE,
    error::{CliError, Result},
    project::{detect, Project},
    toolchain, ui,
};

pub fn run(args: ProjectOptions) -> Result<()> {
    let project = Project::load(&args.path)?;
    let config = &project.config;

    ui::status(format!("Checking project at {}", project.dir.display()));

    if project.dir.join(CONFIG_FILE).is_file() {
        ui::success(format!("{CONFIG_FILE} is valid"));
    } else {
        ui::warn(format!("{CONFIG_FILE} not found, using defaults"));
    }

    if args.verbose {
        ui::status(format!(
            "toolchain {}, optimize {} ({}), artifacts {}, cache {}",
            config.build.toolchain,
            config.build.optimize,
            config.build.opt_level,
            project.artifacts_dir().display(),
            project.cache_dir().display()
        ));
    }

    let mut failures = 0;

    let checks = detect::inspect_manifest(&project.dir)?;
    record("lib crate-type includes cdylib", checks.has_cdylib, &mut failures);
    record(
        "feature 'contract' exists",
        checks.has_contract_feature,
        &mut failures,
    );
    record(
        "profile.release.overflow-checks = true",
        checks.has_release_overflow_checks,
        &mut failures,
    );

    let status = toolchain::inspect(&config.build.toolchain);
    let toolchain_check = format!("toolchain '{}' available", status.channel);
    record(&toolchain_check, status.installed, &mut failures);
    let target_check = format!(
        "{} target installed for {}",
        toolchain::WASM_TARGET,
        status.channel
    );
    record(&target_check, status.wasm_target, &mut failures);
    let rust_src_check = format!("rust-src component installed for {}", status.channel);
    record(&rust_src_check, status.rust_src, &mut failures);

    match status.wasm_opt {
        Some(path) => ui::success(format!("wasm-opt found at {}", path.display())),
        None if config.build.optimize => {
            ui::warn("wasm-opt not found (optimize is enabled, builds will skip it)");
        }
        None => {}
    }

    let ledger = project.ledger();
    if ledger.is_deployed() {
        let counter = ledger.load()?;
        ui::success(format!(
            "local instance at {} (value {})",
            ledger.path().display(),
            counter.get_count()
        ));
    } else {
        ui::status("no local instance deployed");
    }

    if failures > 0 {
        return Err(CliError::Message(format!(
            "check failed with {failures} issue(s)"
        )));
    }

    ui::success("All checks passed");
    Ok(())
}

fn record(name: &str, ok: bool, failures: &mut usize) {
    if ok {
        ui::success(name);
    } else {
        *failures += 1;
        ui::error(name);
    }
}
