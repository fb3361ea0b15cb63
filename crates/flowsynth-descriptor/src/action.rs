use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

///
/// ActionConfig
///
/// An action declared at application scope, or the inline part of a
/// handler action. `reference` is empty for id-only back-references.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ActionConfig {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "ref", default)]
    pub reference: String,

    #[serde(default)]
    pub settings: Map<String, Value>,
}

///
/// HandlerActionConfig
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HandlerActionConfig {
    #[serde(flatten)]
    pub action: ActionConfig,

    /// Guard expression; empty means unconditional.
    #[serde(rename = "if", default)]
    pub condition: String,

    #[serde(default)]
    pub input: BTreeMap<String, Value>,

    #[serde(default)]
    pub output: BTreeMap<String, Value>,
}

impl HandlerActionConfig {
    /// True when this entry only points at an application-scope action.
    #[must_use]
    pub const fn is_back_reference(&self) -> bool {
        !self.action.id.is_empty()
    }
}
