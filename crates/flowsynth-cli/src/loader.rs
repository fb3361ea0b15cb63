use flowsynth_build::resource::{
    Resource, ResourceLoadError, ResourceLoader, ResourcePolicy, ResourceRegistry,
};
use flowsynth_config::Config;
use flowsynth_descriptor::{Descriptor, ResourceConfig};
use std::collections::BTreeSet;

///
/// JsonResourceLoader
///
/// Parses resource data as JSON. `inline` decides whether the raw bytes are
/// serialized into the generated program.
///

#[derive(Clone, Debug)]
pub struct JsonResourceLoader {
    kind: String,
    inline: bool,
}

impl JsonResourceLoader {
    #[must_use]
    pub fn new(kind: &str, inline: bool) -> Self {
        Self {
            kind: kind.to_string(),
            inline,
        }
    }
}

impl ResourcePolicy for JsonResourceLoader {
    fn generate(&self) -> bool {
        self.inline
    }
}

impl ResourceLoader for JsonResourceLoader {
    fn load(&self, config: &ResourceConfig) -> Result<Resource, ResourceLoadError> {
        let data = serde_json::from_str(config.data.get())
            .map_err(|err| ResourceLoadError::load(&config.id, err.to_string()))?;

        Ok(Resource {
            id: config.id.clone(),
            kind: self.kind.clone(),
            data,
        })
    }

    fn policy(&self) -> Option<&dyn ResourcePolicy> {
        Some(self)
    }
}

/// One loader per resource kind named in the config or used by the descriptor.
#[must_use]
pub fn registry(config: &Config, descriptor: &Descriptor) -> ResourceRegistry {
    let kinds: BTreeSet<&str> = config
        .resources
        .keys()
        .map(String::as_str)
        .chain(descriptor.resources.iter().filter_map(ResourceConfig::kind))
        .collect();

    let mut registry = ResourceRegistry::new();
    for kind in kinds {
        registry.register(kind, JsonResourceLoader::new(kind, config.inline(kind)));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowsynth_build::resource::should_generate;

    fn descriptor() -> Descriptor {
        Descriptor::from_json(
            r#"{ "name": "demo", "type": "flogo:app", "resources": [
                { "id": "flow:main", "data": { "tasks": [] } },
                { "id": "flow:other", "data": {} }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn loads_json_data() {
        let descriptor = descriptor();
        let loader = JsonResourceLoader::new("flow", true);

        let resource = loader.load(&descriptor.resources[0]).unwrap();

        assert_eq!(resource.kind, "flow");
        assert_eq!(resource.data, serde_json::json!({ "tasks": [] }));
    }

    #[test]
    fn registry_covers_config_and_descriptor_kinds() {
        let config = Config::from_toml("[resources.schema]\ninline = false").unwrap();
        let registry = registry(&config, &descriptor());

        assert!(should_generate(registry.loader("flow", "flow:main").unwrap()));
        assert!(!should_generate(registry.loader("schema", "schema:x").unwrap()));
        assert!(registry.loader("other", "other:x").is_err());
    }

    #[test]
    fn configured_opt_out_is_honored() {
        let config = Config::from_toml("[resources.flow]\ninline = false").unwrap();
        let registry = registry(&config, &descriptor());

        assert!(!should_generate(registry.loader("flow", "flow:main").unwrap()));
    }
}
