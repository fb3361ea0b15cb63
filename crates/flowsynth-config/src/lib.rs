//! `flowsynth.toml` loading.
//!
//! ```toml
//! runtime_crate = "::flow_core"
//! search_roots = ["vendor/contrib"]
//!
//! [contributions]
//! "github.com/project-flogo/contrib/trigger/rest" = "flogo:trigger"
//!
//! [resources.flow]
//! inline = true
//! ```

use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File name looked up next to the descriptor when no path is given.
pub const CONFIG_FILE: &str = "flowsynth.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root path of the runtime crate generated programs link against.
    pub runtime_crate: Option<String>,

    /// Import path → contributor type, for contributions without a
    /// `descriptor.json` on disk.
    pub contributions: BTreeMap<String, String>,

    /// Directories searched for `<import path>/descriptor.json`.
    pub search_roots: Vec<PathBuf>,

    pub resources: BTreeMap<String, ResourceKindConfig>,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read a config file. Relative search roots are taken relative to the
    /// file's directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            for root in &mut config.search_roots {
                if root.is_relative() {
                    *root = base.join(&*root);
                }
            }
        }

        Ok(config)
    }

    /// Load `explicit` if given, else `flowsynth.toml` in `dir` if present,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::from_path(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    #[must_use]
    pub fn contribution_kind(&self, import_path: &str) -> Option<&str> {
        self.contributions.get(import_path).map(String::as_str)
    }

    /// Whether resources of `kind` are serialized into generated programs.
    /// Kinds without a table default to inline.
    #[must_use]
    pub fn inline(&self, kind: &str) -> bool {
        self.resources.get(kind).is_none_or(|resource| resource.inline)
    }
}

///
/// ResourceKindConfig
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceKindConfig {
    #[serde(default = "ResourceKindConfig::default_inline")]
    pub inline: bool,
}

impl ResourceKindConfig {
    const fn default_inline() -> bool {
        true
    }
}

impl Default for ResourceKindConfig {
    fn default() -> Self {
        Self {
            inline: Self::default_inline(),
        }
    }
}

///
/// TESTS
///
