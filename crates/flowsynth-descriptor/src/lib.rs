//! ## Crate layout
//! - `app`: the application descriptor root and its JSON loader.
//! - `action`, `trigger`: action, trigger, handler, and handler-action configs.
//! - `import`: `[alias ]path[@version]` import parsing and canonical aliases.
//! - `property`, `resource`: properties, resources, and schema definitions.
//! - `reference`: `#alias` vs literal-path entity references.
//!
//! The descriptor is read-only input to synthesis; nothing here resolves
//! contributions or touches the filesystem beyond `Descriptor::from_path`.

pub mod action;
pub mod app;
pub mod import;
pub mod property;
pub mod reference;
pub mod resource;
pub mod trigger;

pub use action::{ActionConfig, HandlerActionConfig};
pub use app::{APP_TYPE, Descriptor};
pub use import::{Import, ImportError, parse_imports};
pub use property::{PropertyConfig, PropertyType, UnknownPropertyType};
pub use reference::{REF_SIGIL, Reference};
pub use resource::{ResourceConfig, SchemaDef};
pub use trigger::{HandlerConfig, TriggerConfig};

use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// DescriptorError
///

#[derive(Debug, ThisError)]
pub enum DescriptorError {
    #[error("failed to read descriptor '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed descriptor: {0}")]
    Json(#[from] serde_json::Error),
}
