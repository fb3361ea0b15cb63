use crate::{registry::ImportRegistry, resource::ResourceManager};
use flowsynth_descriptor::ActionConfig;
use proc_macro2::{Ident, TokenStream};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// GeneratorError
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct GeneratorError {
    pub message: String,
}

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// SettingsGenerator
///
/// Emits the statements that bind `settings` for an action. The fragment is
/// spliced into the body verbatim, right before the statement that wires
/// `settings` into the builder. Registered aliases the fragment uses as path
/// roots (`log::Settings`) are bound in the header, so activity imports it
/// names do not stay side-effect only.
///

pub trait SettingsGenerator {
    fn generate(
        &self,
        settings: &Ident,
        imports: &ImportRegistry,
        config: &ActionConfig,
    ) -> Result<TokenStream, GeneratorError>;
}

///
/// ActionFactory
///

pub trait ActionFactory {
    /// Called once per pass after resources are loaded.
    fn initialize(&mut self, _resources: &ResourceManager) -> Result<(), GeneratorError> {
        Ok(())
    }

    fn as_generator(&self) -> Option<&dyn SettingsGenerator> {
        None
    }
}

///
/// FactoryRegistry
///
/// Import path → factory.
///

#[derive(Default)]
pub struct FactoryRegistry {
    factories: BTreeMap<String, Box<dyn ActionFactory>>,
}

impl FactoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, path: &str, factory: impl ActionFactory + 'static) {
        self.factories.insert(path.to_string(), Box::new(factory));
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&dyn ActionFactory> {
        self.factories.get(path).map(|factory| factory.as_ref())
    }

    /// Run every factory's initialization hook, failing on the first error.
    pub fn initialize_all(&mut self, resources: &ResourceManager) -> Result<(), (String, GeneratorError)> {
        for (path, factory) in &mut self.factories {
            factory
                .initialize(resources)
                .map_err(|err| (path.clone(), err))?;
        }

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
