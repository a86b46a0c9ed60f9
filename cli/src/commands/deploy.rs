use dusk_counter::Session;

use crate::{
    cli::DeployArgs,
    error::{CliError, Result},
    project::Project,
    ui,
};

pub fn run(args: DeployArgs) -> Result<()> {
    let project = Project::load(&args.project.path)?;
    let ledger = project.ledger();

    if ledger.is_deployed() {
        if !args.force {
            return Err(CliError::AlreadyDeployed(ledger.path().to_path_buf()));
        }
        ui::warn(format!("Replacing instance at {}", ledger.path().display()));
    }

    let session = Session::new();
    ledger.store(session.state())?;

    if args.project.verbose {
        ui::status(format!("Wrote {}", ledger.path().display()));
    }

    ui::success(format!(
        "Deployed counter instance with value {}",
        session.state().get_count()
    ));
    Ok(())
}
