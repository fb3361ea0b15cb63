use crate::HandlerActionConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///
/// TriggerConfig
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TriggerConfig {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "ref")]
    pub reference: String,

    #[serde(default)]
    pub settings: Map<String, Value>,

    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

///
/// HandlerConfig
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HandlerConfig {
    #[serde(default)]
    pub settings: Map<String, Value>,

    #[serde(default)]
    pub actions: Vec<HandlerActionConfig>,
}
