use dusk_counter::{Call, Session};

use crate::{cli::CallArgs, error::Result, project::Project, ui};

pub fn run(args: CallArgs) -> Result<()> {
    let project = Project::load(&args.project.path)?;
    let ledger = project.ledger();
    let call = Call::from(args.function);

    let mut session = Session::from_state(ledger.load()?);
    if args.project.verbose {
        ui::status(format!(
            "Loaded instance at {} (value {})",
            ledger.path().display(),
            session.state().get_count()
        ));
    }

    let receipt = session.call(call)?;

    if !call.is_read_only() {
        ledger.store(session.state())?;
    }

    if args.json {
        println!("{}", serde_json::to_string(&receipt)?);
    } else {
        if let Some(data) = receipt.data {
            println!("{data}");
        }
        for event in &receipt.events {
            println!("{event}");
        }
    }

    if call.is_read_only() {
        ui::success(format!("{call} executed"));
    } else {
        ui::success(format!(
            "{call} committed, count is now {}",
            session.state().get_count()
        ));
    }
    Ok(())
}
