use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE: &str = "Forge.toml";
pub const DEFAULT_TOOLCHAIN: &str = "nightly-2024-07-30";

/// Project configuration read from `Forge.toml`.
///
/// Every key is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    pub build: BuildConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Toolchain channel passed as `cargo +<channel>`.
    pub toolchain: String,
    /// Run `wasm-opt` on the contract when it is installed.
    pub optimize: bool,
    pub opt_level: OptLevel,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            toolchain: DEFAULT_TOOLCHAIN.to_string(),
            optimize: true,
            opt_level: OptLevel::Z,
        }
    }
}

/// `wasm-opt` optimization level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptLevel {
    #[serde(rename = "0")]
    O0,
    #[serde(rename = "1")]
    O1,
    #[serde(rename = "2")]
    O2,
    #[serde(rename = "3")]
    O3,
    #[serde(rename = "4")]
    O4,
    #[serde(rename = "s")]
    S,
    #[default]
    #[serde(rename = "z")]
    Z,
}

impl OptLevel {
    pub fn flag(self) -> &'static str {
        match self {
            Self::O0 => "-O0",
            Self::O1 => "-O1",
            Self::O2 => "-O2",
            Self::O3 => "-O3",
            Self::O4 => "-O4",
            Self::S => "-Os",
            Self::Z => "-Oz",
        }
    }
}

impl fmt::Display for OptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PathsConfig {
    /// Target directory of the contract WASM build.
    pub artifacts: PathBuf,
    /// Directory holding the local contract instance.
    pub cache: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            artifacts: PathBuf::from("target/contract"),
            cache: PathBuf::from(".forge"),
        }
    }
}

impl Config {
    /// Loads `Forge.toml` from `project_dir`, falling back to defaults when
    /// the file does not exist.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.build.toolchain.trim().is_empty() {
            return Err(CliError::InvalidConfig {
                key: "build.toolchain",
                reason: "toolchain channel cannot be empty".to_string(),
            });
        }

        if self.paths.artifacts.as_os_str().is_empty() {
            return Err(CliError::InvalidConfig {
                key: "paths.artifacts",
                reason: "path cannot be empty".to_string(),
            });
        }

        if self.paths.cache.as_os_str().is_empty() {
            return Err(CliError::InvalidConfig {
                key: "paths.cache",
                reason: "path cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.build.toolchain, DEFAULT_TOOLCHAIN);
        assert!(config.build.optimize);
        assert_eq!(config.build.opt_level.flag(), "-Oz");
        assert_eq!(config.paths.cache, PathBuf::from(".forge"));
    }

    #[test]
    fn parses_partial_sections() {
        let config = Config::parse(
            r#"
            [build]
            optimize = false
            opt-level = "3"

            [paths]
            cache = "state"
            "#,
        )
        .expect("config should parse");

        assert!(!config.build.optimize);
        assert_eq!(config.build.opt_level, OptLevel::O3);
        assert_eq!(config.build.toolchain, DEFAULT_TOOLCHAIN);
        assert_eq!(config.paths.cache, PathBuf::from("state"));
        assert_eq!(config.paths.artifacts, PathBuf::from("target/contract"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::parse("[networks]\nsepolia = {}\n").expect_err("unknown section");
        assert!(matches!(err, CliError::Toml(_)));
    }

    #[test]
    fn rejects_unknown_opt_level() {
        let err = Config::parse("[build]\nopt-level = \"fast\"\n").expect_err("bad level");
        assert!(matches!(err, CliError::Toml(_)));
    }

    #[test]
    fn rejects_empty_toolchain() {
        let err = Config::parse("[build]\ntoolchain = \" \"\n").expect_err("empty toolchain");
        assert!(err.to_string().contains("build.toolchain"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load(dir.path()).expect("missing file is fine");
        assert_eq!(config, Config::default());
    }
}
