use std::{fs, path::Path};

use crate::{cli::ProjectOptions, error::Result, project::Project, ui};

pub fn run(args: ProjectOptions) -> Result<()> {
    let project = Project::load(&args.path)?;

    remove_if_exists(&project.artifacts_dir())?;
    remove_if_exists(&project.cache_dir())?;

    ui::success("Cleaned build artifacts and local instance");
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
        ui::status(format!("Removed {}", path.display()));
    } else {
        ui::status(format!("Skipped {}, not present", path.display()));
    }
    Ok(())
}
