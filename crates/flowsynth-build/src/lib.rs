//! Synthesis of builder-API Rust programs from application descriptors.
//!
//! ## Crate layout
//! - `driver`: the synthesis pass (`Synthesizer`) and its per-section emitters.
//! - `buffer`: header/body accumulator of generated statements.
//! - `registry`, `naming`, `literal`, `paths`: alias bindings, generated
//!   identifiers, verbose value literals, and runtime crate paths.
//! - `generator`, `resource`, `schema`, `resolve`, `support`: the collaborator
//!   interfaces a pass consumes.
//! - `validate`: parse + canonicalize + write of the assembled text.

pub mod buffer;
pub mod driver;
pub mod error;
pub mod generator;
pub mod literal;
pub mod naming;
pub mod paths;
pub mod registry;
pub mod resolve;
pub mod resource;
pub mod schema;
pub mod support;
pub mod validate;

pub use driver::{Collaborators, Synthesis, Synthesizer};
pub use error::Error;

use flowsynth_descriptor::Descriptor;
use paths::RuntimePaths;
use std::path::Path;

/// Run one synthesis pass and write the canonicalized program to `destination`.
///
/// On a syntax failure the raw text is still written and
/// `Error::SynthesisSyntax` is returned.
pub fn generate<'a>(
    descriptor: &'a Descriptor,
    collaborators: Collaborators<'a>,
    paths: RuntimePaths,
    work_dir: &Path,
    destination: &Path,
) -> Result<(), Error> {
    let synthesis = Synthesizer::new(descriptor, collaborators, paths, work_dir).synthesize()?;

    validate::write(destination, synthesis.buffer.into_tokens())
}
