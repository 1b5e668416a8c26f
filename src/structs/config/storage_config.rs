use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Root for document collections. Defaults to `<app dir>/data`.
    #[serde(default)]
    pub data_dir: Option<String>,
}
