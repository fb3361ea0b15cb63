mod actions;
mod imports;
mod resources;
mod setup;
mod triggers;
mod values;

use crate::{
    Error,
    buffer::{CodeBuffer, StatementKind},
    generator::FactoryRegistry,
    naming,
    paths::RuntimePaths,
    registry::ImportRegistry,
    resolve::DependencyResolver,
    resource::{ResourceManager, ResourceRegistry},
    schema::SchemaStore,
    support::RegistrationContext,
    validate,
};
use flowsynth_descriptor::{APP_TYPE, Descriptor};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

///
/// Collaborators
///
/// Everything a pass consumes but does not own.
///

pub struct Collaborators<'a> {
    pub resolver: &'a dyn DependencyResolver,
    pub schemas: &'a mut dyn SchemaStore,
    pub loaders: &'a ResourceRegistry,
    pub factories: &'a mut FactoryRegistry,
    pub context: &'a mut RegistrationContext,
}

///
/// Synthesis
///
/// Result of a pass before validation.
///

#[derive(Debug)]
pub struct Synthesis {
    pub buffer: CodeBuffer,
    pub imports: ImportRegistry,
    pub resources: ResourceManager,
}

impl Synthesis {
    /// Validate and canonicalize without touching the filesystem.
    pub fn render(self) -> Result<String, Error> {
        let raw = self.buffer.into_tokens().to_string();

        validate::canonicalize(&raw).map_err(|diagnostic| Error::SynthesisSyntax {
            destination: PathBuf::from(validate::IN_MEMORY),
            diagnostic,
        })
    }
}

///
/// Synthesizer
///
/// One synthesis pass over one descriptor. The registry and buffer are owned
/// by the pass and dropped (or handed back in `Synthesis`) when it ends.
///

pub struct Synthesizer<'a> {
    descriptor: &'a Descriptor,
    env: Collaborators<'a>,
    paths: RuntimePaths,
    work_dir: PathBuf,
    registry: ImportRegistry,
    resources: ResourceManager,
    buffer: CodeBuffer,
}

impl<'a> Synthesizer<'a> {
    #[must_use]
    pub fn new(
        descriptor: &'a Descriptor,
        env: Collaborators<'a>,
        paths: RuntimePaths,
        work_dir: &Path,
    ) -> Self {
        Self {
            descriptor,
            env,
            paths,
            work_dir: work_dir.to_path_buf(),
            registry: ImportRegistry::new(),
            resources: ResourceManager::default(),
            buffer: CodeBuffer::new(),
        }
    }

    /// Walk the descriptor in its fixed order and fill the code buffer.
    pub fn synthesize(mut self) -> Result<Synthesis, Error> {
        let descriptor = self.descriptor;
        info!(app = %descriptor.name, version = %descriptor.version, "synthesizing application");

        if !descriptor.is_app() {
            return Err(Error::InvalidDescriptorType {
                found: descriptor.kind.clone(),
                expected: APP_TYPE,
            });
        }

        self.metadata();
        imports::register(&mut self)?;
        setup::register_schemas(&mut self)?;
        setup::install_properties(&mut self);

        let app = naming::app();
        self.buffer.push(
            StatementKind::AppConstruction,
            quote!(let mut #app = api::App::new();),
        );

        resources::emit(&mut self)?;
        values::properties(&mut self);
        values::channels(&mut self);
        actions::emit(&mut self)?;
        triggers::emit(&mut self)?;
        self.engine();

        info!(
            imports = self.registry.len(),
            resources = self.resources.len(),
            statements = self.buffer.statements().len(),
            "synthesis pass complete"
        );

        Ok(Synthesis {
            buffer: self.buffer,
            imports: self.registry,
            resources: self.resources,
        })
    }

    // metadata
    // module docs carrying the descriptor header, then lint allowances for
    // locals the builder API may not consume
    fn metadata(&mut self) {
        let descriptor = self.descriptor;
        let fields = [
            ("Name", &descriptor.name),
            ("Type", &descriptor.kind),
            ("Version", &descriptor.version),
            ("Description", &descriptor.description),
            ("AppModel", &descriptor.app_model),
        ];

        for (label, value) in fields {
            let line = format!(" {label}: {value}");
            self.buffer.push_attr(quote!(#![doc = #line]));
        }
        self.buffer
            .push_attr(quote!(#![allow(unused_imports, unused_mut, unused_variables)]));
    }

    fn engine(&mut self) {
        let app = naming::app();
        let engine = naming::engine();

        self.buffer.push(
            StatementKind::EngineConstruction,
            quote!(let #engine = api::new_engine(#app);),
        );
        self.buffer.push(StatementKind::ErrorCheck, error_check(&engine));
        self.buffer.push(
            StatementKind::EngineRun,
            quote!(engine::run_engine(#engine);),
        );
    }

    /// Resolve an entity reference and make sure the header binds its alias.
    /// Returns the alias identifier and the import's package path.
    fn bind_reference(&mut self, reference: &str) -> Result<(Ident, String), Error> {
        let import = self.registry.resolve(reference)?;
        let alias = import.canonical_alias().to_string();
        let path = import.path().to_string();

        self.buffer.bind_import(&alias);
        debug!(reference, alias = %alias, "resolved reference");

        Ok((format_ident!("{alias}"), path))
    }
}

// error_check
// rebinds the unwrapped value under the same name
fn error_check(target: &Ident) -> TokenStream {
    quote!(let mut #target = #target?;)
}
