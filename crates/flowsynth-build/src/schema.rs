use flowsynth_descriptor::SchemaDef;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

/// The schema type tag the in-memory store knows how to resolve.
pub const JSON_SCHEMA_TYPE: &str = "json";

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("schema '{0}' is already registered")]
    Duplicate(String),

    #[error("schema '{0}' has no type")]
    MissingType(String),

    #[error("schema '{id}' has unsupported type '{ty}'")]
    UnsupportedType { id: String, ty: String },

    #[error("schema '{id}' is not valid json: {source}")]
    Invalid {
        id: String,
        source: serde_json::Error,
    },
}

///
/// SchemaStore
///

pub trait SchemaStore {
    fn register(&mut self, id: &str, def: &SchemaDef) -> Result<(), SchemaError>;

    /// Resolve every registered schema as one batch.
    fn resolve_all(&mut self) -> Result<(), SchemaError>;
}

///
/// InMemorySchemaStore
///

#[derive(Debug, Default)]
pub struct InMemorySchemaStore {
    defs: BTreeMap<String, SchemaDef>,
    resolved: BTreeMap<String, Value>,
}

impl InMemorySchemaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn resolved(&self, id: &str) -> Option<&Value> {
        self.resolved.get(id)
    }
}

impl SchemaStore for InMemorySchemaStore {
    fn register(&mut self, id: &str, def: &SchemaDef) -> Result<(), SchemaError> {
        if def.ty.trim().is_empty() {
            return Err(SchemaError::MissingType(id.to_string()));
        }
        if self.defs.contains_key(id) {
            return Err(SchemaError::Duplicate(id.to_string()));
        }
        self.defs.insert(id.to_string(), def.clone());

        Ok(())
    }

    fn resolve_all(&mut self) -> Result<(), SchemaError> {
        for (id, def) in &self.defs {
            if self.resolved.contains_key(id) {
                continue;
            }
            if def.ty != JSON_SCHEMA_TYPE {
                return Err(SchemaError::UnsupportedType {
                    id: id.clone(),
                    ty: def.ty.clone(),
                });
            }

            let value = serde_json::from_str(&def.value).map_err(|source| SchemaError::Invalid {
                id: id.clone(),
                source,
            })?;
            self.resolved.insert(id.clone(), value);
        }

        Ok(())
    }
}
