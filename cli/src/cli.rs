use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use dusk_counter::Call;

#[derive(Debug, Parser)]
#[command(name = "counter-forge")]
#[command(bin_name = "counter-forge")]
#[command(about = "Build the counter contract and exercise a local instance")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Instantiate a fresh local contract instance.
    Deploy(DeployArgs),
    /// Execute a contract function against the local instance.
    Call(CallArgs),
    /// Print the contract schema as JSON.
    Schema(SchemaArgs),
    /// Build the contract WASM.
    Build(ProjectOptions),
    /// Validate configuration and toolchain.
    Check(ProjectOptions),
    /// Remove build artifacts and the local instance.
    Clean(ProjectOptions),
    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ProjectOptions {
    /// Path to the contract project directory.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DeployArgs {
    #[command(flatten)]
    pub project: ProjectOptions,

    /// Replace an existing instance with a fresh one.
    #[arg(long)]
    pub force: bool,
}

/// Functions exported by the counter contract.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Function {
    #[value(name = "get-count", alias = "get_count")]
    GetCount,
    Increment,
    Decrement,
}

impl From<Function> for Call {
    fn from(function: Function) -> Self {
        match function {
            Function::GetCount => Call::GetCount,
            Function::Increment => Call::Increment,
            Function::Decrement => Call::Decrement,
        }
    }
}

#[derive(Debug, Args)]
pub struct CallArgs {
    #[command(flatten)]
    pub project: ProjectOptions,

    /// Contract function to execute.
    #[arg(value_enum)]
    pub function: Function,

    /// Print the call receipt as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}
