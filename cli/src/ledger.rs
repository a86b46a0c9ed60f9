//! Persistence of the local contract instance.
//!
//! The instance is stored as `{"value": <u64>}`. Writes go to a temporary
//! sibling file first and are renamed over the old state, so a failed write
//! never leaves a half-written instance behind.

use std::{
    fs,
    path::{Path, PathBuf},
};

use dusk_counter::Counter;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const INSTANCE_FILE: &str = "counter.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct InstanceState {
    value: u64,
}

#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            path: cache_dir.join(INSTANCE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_deployed(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<Counter> {
        if !self.is_deployed() {
            return Err(CliError::NotDeployed(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let state: InstanceState =
            serde_json::from_str(&content).map_err(|source| CliError::CorruptState {
                path: self.path.clone(),
                source,
            })?;

        Ok(Counter::with_value(state.value))
    }

    pub fn store(&self, counter: &Counter) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let state = InstanceState {
            value: counter.get_count(),
        };
        let tmp = self.path.with_extension("json.tmp");
        let written = fs::write(&tmp, serde_json::to_string(&state)?)
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}
