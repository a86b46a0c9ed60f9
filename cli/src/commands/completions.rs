use std::io::{self, BufWriter, Write};

use clap::CommandFactory;
use clap_complete::generate;

use crate::{
    cli::{Cli, CompletionsArgs},
    error::Result,
};

/// Completions are registered for the installed binary name, so they
/// apply to `counter-forge` rather than the package name.
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd
        .get_bin_name()
        .unwrap_or_else(|| cmd.get_name())
        .to_owned();

    let mut out = BufWriter::new(io::stdout().lock());
    generate(args.shell, &mut cmd, bin_name, &mut out);
    out.flush()?;
    Ok(())
}
