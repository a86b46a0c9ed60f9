pub mod detect;
pub mod metadata;

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{config::Config, ledger::Ledger};

/// A contract project directory together with its configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub dir: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let dir = fs::canonicalize(path)?;
        let config = Config::load(&dir)?;
        Ok(Self { dir, config })
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.dir.join(&self.config.paths.artifacts)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.dir.join(&self.config.paths.cache)
    }

    pub fn ledger(&self) -> Ledger {
        Ledger::new(&self.cache_dir())
    }
}
