use crate::{Error, paths::RUNTIME_MODULES};
use flowsynth_descriptor::{Import, Reference};
use std::collections::BTreeMap;

///
/// ImportRegistry
///
/// Canonical alias → Import, built once per synthesis pass.
///

#[derive(Clone, Debug, Default)]
pub struct ImportRegistry {
    by_alias: BTreeMap<String, Import>,
}

impl ImportRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `alias` to `import`. Rebinding the identical import is a no-op;
    /// binding a different one, or shadowing a runtime module, fails.
    pub fn register(&mut self, alias: &str, import: Import) -> Result<(), Error> {
        if RUNTIME_MODULES.contains(&alias) {
            return Err(Error::DuplicateAlias {
                alias: alias.to_string(),
                existing: format!("runtime module `{alias}`"),
                requested: import.to_string(),
            });
        }

        if let Some(existing) = self.by_alias.get(alias) {
            if *existing == import {
                return Ok(());
            }

            return Err(Error::DuplicateAlias {
                alias: alias.to_string(),
                existing: existing.to_string(),
                requested: import.to_string(),
            });
        }

        self.by_alias.insert(alias.to_string(), import);

        Ok(())
    }

    /// Resolve `#alias` by alias and anything else by literal package path.
    pub fn resolve(&self, reference: &str) -> Result<&Import, Error> {
        let found = match Reference::parse(reference) {
            Reference::Alias(alias) => self.by_alias.get(alias),
            Reference::Path(path) => self.by_alias.values().find(|import| import.path() == path),
        };

        found.ok_or_else(|| Error::UnresolvedReference(reference.to_string()))
    }

    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&Import> {
        self.by_alias.get(alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Import)> {
        self.by_alias.iter().map(|(alias, import)| (alias.as_str(), import))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}
