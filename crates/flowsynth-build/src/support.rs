//! Registration context owned by the caller.
//!
//! Generated code is compiled later against the same alias bindings and
//! property defaults the pass saw, so these outlive a single pass. The CLI
//! keeps one context for the lifetime of the process.

use crate::Error;
use serde_json::Value;
use std::collections::BTreeMap;

///
/// AliasSupport
///
/// (contributor kind, alias) → resolved module path.
///

#[derive(Clone, Debug, Default)]
pub struct AliasSupport {
    entries: BTreeMap<(String, String), String>,
}

impl AliasSupport {
    pub fn register(&mut self, kind: &str, alias: &str, path: &str) -> Result<(), Error> {
        let key = (kind.to_string(), alias.to_string());

        match self.entries.get(&key) {
            Some(existing) if existing != path => Err(Error::DuplicateAlias {
                alias: alias.to_string(),
                existing: existing.clone(),
                requested: path.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(key, path.to_string());
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn get(&self, kind: &str, alias: &str) -> Option<&str> {
        self.entries
            .get(&(kind.to_string(), alias.to_string()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

///
/// PropertyManager
///

#[derive(Clone, Debug, Default)]
pub struct PropertyManager {
    values: BTreeMap<String, Value>,
}

impl PropertyManager {
    #[must_use]
    pub const fn new(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

///
/// RegistrationContext
///

#[derive(Debug, Default)]
pub struct RegistrationContext {
    aliases: AliasSupport,
    default_properties: Option<PropertyManager>,
}

impl RegistrationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn aliases(&self) -> &AliasSupport {
        &self.aliases
    }

    pub const fn aliases_mut(&mut self) -> &mut AliasSupport {
        &mut self.aliases
    }

    /// Install the process default property source, replacing any previous one.
    pub fn set_default_properties(&mut self, properties: PropertyManager) {
        self.default_properties = Some(properties);
    }

    #[must_use]
    pub const fn default_properties(&self) -> Option<&PropertyManager> {
        self.default_properties.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_support_is_keyed_by_kind() {
        let mut aliases = AliasSupport::default();
        aliases.register("trigger", "rest", "::acme::rest").unwrap();
        aliases.register("activity", "rest", "::acme::activity::rest").unwrap();

        assert_eq!(aliases.get("trigger", "rest"), Some("::acme::rest"));
        assert_eq!(aliases.len(), 2);
    }

    #[test]
    fn alias_support_rejects_conflicting_path() {
        let mut aliases = AliasSupport::default();
        aliases.register("trigger", "rest", "::acme::rest").unwrap();

        assert!(aliases.register("trigger", "rest", "::acme::rest").is_ok());
        assert!(matches!(
            aliases.register("trigger", "rest", "::other::rest"),
            Err(Error::DuplicateAlias { .. })
        ));
    }
}
