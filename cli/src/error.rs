use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Message(String),

    #[error("{0}")]
    Contract(#[from] dusk_counter::Error),

    #[error("no deployed instance at {0}; run `counter-forge deploy` first")]
    NotDeployed(PathBuf),

    #[error("instance already deployed at {0} (use --force to replace it)")]
    AlreadyDeployed(PathBuf),

    #[error("invalid config value for '{key}': {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("corrupt instance state at {path}: {source}")]
    CorruptState {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("required tool not found: {tool}. {hint}")]
    MissingTool {
        tool: &'static str,
        hint: &'static str,
    },

    #[error("command failed: {program} (exit code {code})")]
    CommandFailed { program: String, code: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cargo metadata error: {0}")]
    CargoMetadata(#[from] cargo_metadata::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
