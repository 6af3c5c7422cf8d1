//! Generator configuration
//!
//! Loaded from an optional `msgbridge.toml`; every key has a default and
//! command-line flags override file values.
//!
//! ```toml
//! output_dir = "src/generated"
//! crate_root = "crate::generated"
//! runtime_crate = "msgbridge_wire"
//! header_package = "std_msgs"
//! log_level = "debug"
//! ```

use crate::LogLevel;
use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "msgbridge.toml";

/// Settings shared by every generated unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root of the generated tree; when unset each package generates into
    /// `<pkg_dir>/src/<pkg>/<kind>`
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Module path under which package modules are mounted
    #[serde(default = "default_crate_root")]
    pub crate_root: String,

    /// Crate name of the wire runtime as seen by generated code
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,

    /// Package owning the reserved `Header` type
    #[serde(default = "default_header_package")]
    pub header_package: String,

    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_crate_root() -> String {
    "crate".to_string()
}

fn default_runtime_crate() -> String {
    "msgbridge_wire".to_string()
}

fn default_header_package() -> String {
    "std_msgs".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            crate_root: default_crate_root(),
            runtime_crate: default_runtime_crate(),
            header_package: default_header_package(),
            log_level: LogLevel::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> GenResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|err| GenError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file
    pub fn load(path: &Path) -> GenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            GenError::InvalidConfig(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    /// Load `path` if given, else `msgbridge.toml` in `dir` if present, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> GenResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Using config file");
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }

    /// Reject values generated code could not use
    pub fn validate(&self) -> GenResult<()> {
        let path_ok = |s: &str| {
            !s.is_empty()
                && s.split("::").all(|seg| {
                    let mut chars = seg.chars();
                    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                })
        };
        if !path_ok(&self.crate_root) {
            return Err(GenError::InvalidConfig(format!(
                "crate_root {:?} is not a module path",
                self.crate_root
            )));
        }
        if !path_ok(&self.runtime_crate) || self.runtime_crate.contains("::") {
            return Err(GenError::InvalidConfig(format!(
                "runtime_crate {:?} is not a crate name",
                self.runtime_crate
            )));
        }
        if !path_ok(&self.header_package) || self.header_package.contains("::") {
            return Err(GenError::InvalidConfig(format!(
                "header_package {:?} is not a package name",
                self.header_package
            )));
        }
        Ok(())
    }
}
