use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Separator between the resource kind and its name in a resource id.
pub const RESOURCE_ID_SEPARATOR: char = ':';

///
/// ResourceConfig
///
/// `data` is kept as the raw JSON text so it can be reproduced byte for byte.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResourceConfig {
    pub id: String,
    pub data: Box<RawValue>,
}

impl ResourceConfig {
    #[must_use]
    pub fn data_bytes(&self) -> &[u8] {
        self.data.get().as_bytes()
    }

    /// Kind prefix of the id (`flow` for `flow:main`), if the id has one.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.id
            .split_once(RESOURCE_ID_SEPARATOR)
            .map(|(kind, _)| kind)
            .filter(|kind| !kind.is_empty())
    }
}

///
/// SchemaDef
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SchemaDef {
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub value: String,
}
