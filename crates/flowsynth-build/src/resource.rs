use flowsynth_descriptor::ResourceConfig;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// ResourceLoadError
///

#[derive(Debug, ThisError)]
pub enum ResourceLoadError {
    #[error("resource id '{0}' has no kind prefix, expected 'kind:name'")]
    MalformedId(String),

    #[error("no loader registered for kind '{kind}' of resource '{id}'")]
    UnknownKind { id: String, kind: String },

    #[error("failed to load resource '{id}': {message}")]
    Load { id: String, message: String },
}

impl ResourceLoadError {
    pub fn load(id: &str, message: impl Into<String>) -> Self {
        Self::Load {
            id: id.to_string(),
            message: message.into(),
        }
    }
}

///
/// Resource
///
/// In-memory form of a loaded resource. Only its identity is needed by the
/// pass; `data` is whatever the loader made of the raw bytes.
///

#[derive(Clone, Debug)]
pub struct Resource {
    pub id: String,
    pub kind: String,
    pub data: Value,
}

///
/// ResourcePolicy
///
/// Opt-out hook: a loader exposing this can keep its resources out of the
/// generated program.
///

pub trait ResourcePolicy {
    fn generate(&self) -> bool;
}

///
/// ResourceLoader
///

pub trait ResourceLoader {
    fn load(&self, config: &ResourceConfig) -> Result<Resource, ResourceLoadError>;

    fn policy(&self) -> Option<&dyn ResourcePolicy> {
        None
    }
}

/// Whether a loader wants its resources serialized (true unless it opts out).
#[must_use]
pub fn should_generate(loader: &dyn ResourceLoader) -> bool {
    loader.policy().is_none_or(|policy| policy.generate())
}

///
/// ResourceRegistry
///

#[derive(Default)]
pub struct ResourceRegistry {
    loaders: BTreeMap<String, Box<dyn ResourceLoader>>,
}

impl ResourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: &str, loader: impl ResourceLoader + 'static) {
        self.loaders.insert(kind.to_string(), Box::new(loader));
    }

    /// Resolve the kind of a resource from its id.
    pub fn kind_of(config: &ResourceConfig) -> Result<&str, ResourceLoadError> {
        config
            .kind()
            .ok_or_else(|| ResourceLoadError::MalformedId(config.id.clone()))
    }

    pub fn loader(&self, kind: &str, id: &str) -> Result<&dyn ResourceLoader, ResourceLoadError> {
        self.loaders
            .get(kind)
            .map(|loader| loader.as_ref())
            .ok_or_else(|| ResourceLoadError::UnknownKind {
                id: id.to_string(),
                kind: kind.to_string(),
            })
    }
}

///
/// ResourceManager
///
/// id → Resource for everything loaded during the pass.
///

#[derive(Clone, Debug, Default)]
pub struct ResourceManager {
    resources: BTreeMap<String, Resource>,
}

impl ResourceManager {
    pub fn insert(&mut self, resource: Resource) {
        self.resources.insert(resource.id.clone(), resource);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
