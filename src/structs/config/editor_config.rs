use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "ConfigHelper::default_language")]
    pub default_language: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_language: ConfigHelper::default_language(),
        }
    }
}
