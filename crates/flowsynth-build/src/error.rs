use crate::{
    generator::GeneratorError, resolve::ResolveError, resource::ResourceLoadError,
    schema::SchemaError,
};
use flowsynth_descriptor::ImportError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every variant is fatal to the pass; the first one raised aborts it.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid descriptor type '{found}', expected '{expected}'")]
    InvalidDescriptorType {
        found: String,
        expected: &'static str,
    },

    #[error("alias '{alias}' is already bound to '{existing}', cannot bind '{requested}'")]
    DuplicateAlias {
        alias: String,
        existing: String,
        requested: String,
    },

    #[error("unresolved reference '{0}'")]
    UnresolvedReference(String),

    #[error("invalid runtime crate path '{0}'")]
    InvalidRuntimePath(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Dependency(#[from] ResolveError),

    #[error("schema registration failed: {0}")]
    SchemaRegistration(#[from] SchemaError),

    #[error(transparent)]
    ResourceLoad(#[from] ResourceLoadError),

    #[error("generator for '{reference}' failed: {source}")]
    Generator {
        reference: String,
        source: GeneratorError,
    },

    #[error("{}: {diagnostic}", destination.display())]
    SynthesisSyntax {
        destination: PathBuf,
        diagnostic: syn::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    OutputIo {
        path: PathBuf,
        source: std::io::Error,
    },
}
