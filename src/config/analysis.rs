//! Analysis configuration

use serde::Deserialize;

use crate::domain::analysis::ValidationOptions;

/// Input parsing behaviour for ranking requests
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Strip whitespace around weight and impact tokens
    #[serde(default)]
    pub trim_tokens: bool,
}

impl AnalysisConfig {
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            trim_tokens: self.trim_tokens,
        }
    }
}
