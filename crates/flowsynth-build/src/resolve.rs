use flowsynth_descriptor::Import;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Contributor kind whose imports are linked for side effects only.
pub const ACTIVITY_KIND: &str = "activity";

const KIND_PREFIX: &str = "flogo:";

///
/// ResolveError
///

#[derive(Debug, ThisError)]
pub enum ResolveError {
    #[error("no contribution found for import '{0}'")]
    NotFound(String),

    #[error("failed to read contribution descriptor '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed contribution descriptor '{}': {source}", path.display())]
    Descriptor {
        path: PathBuf,
        source: serde_json::Error,
    },
}

///
/// ContributorDescriptor
///
/// The part of a contribution's `descriptor.json` synthesis cares about.
///

#[derive(Clone, Debug, Deserialize)]
pub struct ContributorDescriptor {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub version: String,
}

impl ContributorDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            version: String::new(),
        }
    }

    /// Kind with any `flogo:` prefix removed (`flogo:activity` → `activity`).
    #[must_use]
    pub fn contrib_kind(&self) -> &str {
        self.kind.strip_prefix(KIND_PREFIX).unwrap_or(&self.kind)
    }

    #[must_use]
    pub fn is_activity(&self) -> bool {
        self.contrib_kind() == ACTIVITY_KIND
    }
}

///
/// DependencyResolver
///

pub trait DependencyResolver {
    fn resolve(&self, work_dir: &Path, import: &Import)
    -> Result<ContributorDescriptor, ResolveError>;
}

///
/// StaticResolver
///
/// Contributor kinds declared up front, keyed by import path.
///

#[derive(Clone, Debug, Default)]
pub struct StaticResolver {
    kinds: BTreeMap<String, String>,
}

impl StaticResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, path: &str, kind: &str) -> Self {
        self.insert(path, kind);
        self
    }

    pub fn insert(&mut self, path: &str, kind: &str) {
        self.kinds.insert(path.to_string(), kind.to_string());
    }
}

impl DependencyResolver for StaticResolver {
    fn resolve(
        &self,
        _work_dir: &Path,
        import: &Import,
    ) -> Result<ContributorDescriptor, ResolveError> {
        self.kinds
            .get(import.path())
            .map(|kind| ContributorDescriptor::new(import.canonical_alias(), kind.as_str()))
            .ok_or_else(|| ResolveError::NotFound(import.to_string()))
    }
}
