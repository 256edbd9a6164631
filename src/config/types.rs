use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On-disk shape of the model directory.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub model_providers: BTreeMap<String, String>,
    /// A `null` or empty value means the vendor's default base URL.
    #[serde(default)]
    pub endpoints: BTreeMap<String, Option<String>>,
}

/// Result of resolving a model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub provider: String,
    pub endpoint: Option<String>,
}
