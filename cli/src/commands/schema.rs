use dusk_counter::CONTRACT_SCHEMA;

use crate::{cli::SchemaArgs, error::Result};

pub fn run(args: SchemaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(&CONTRACT_SCHEMA)?
    } else {
        serde_json::to_string(&CONTRACT_SCHEMA)?
    };

    println!("{json}");
    Ok(())
}
