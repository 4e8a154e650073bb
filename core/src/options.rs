// Session options shared by the engine and the command line front end
// Loaded from a JSON file and/or overridden by CLI flags

use crate::error::{InspectError, InspectResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// Surface `cd`/`cat` lookup misses as `InspectError::LookupMiss`
    /// instead of silently leaving the session unchanged.
    pub report_lookup_miss: bool,
    /// Upper bound on the number of clusters followed in a single chain.
    pub max_chain_length: Option<usize>,
    /// Prompt prefix shown by the interactive shell.
    pub prompt: String,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            report_lookup_miss: false,
            max_chain_length: None,
            prompt: "fat-eater".to_string(),
        }
    }
}

impl InspectOptions {
    pub fn from_json_str(json: &str) -> InspectResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_file(path: &Path) -> InspectResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> InspectResult<()> {
        if self.max_chain_length == Some(0) {
            return Err(InspectError::Configuration(
                "max_chain_length must be at least 1".to_string(),
            ));
        }
        if self.prompt.trim().is_empty() {
            return Err(InspectError::Configuration("prompt cannot be empty".to_string()));
        }
        Ok(())
    }
}
