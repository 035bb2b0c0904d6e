use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{HubError, Result};

/// How `dispatch` reacts when a callback returns an error
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Stop at the first failing callback and return its error
    #[default]
    Propagate,
    /// Run every callback, then report all failures together
    Isolate,
}

impl DispatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Propagate => "propagate",
            Self::Isolate => "isolate",
        }
    }
}

/// Hub settings, usually read from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HubConfig {
    #[serde(default)]
    pub policy: DispatchPolicy,
    /// Reject malformed event names on subscribe and dispatch
    #[serde(default = "default_validate_names")]
    pub validate_names: bool,
}

fn default_validate_names() -> bool {
    true
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            policy: DispatchPolicy::default(),
            validate_names: default_validate_names(),
        }
    }
}

impl HubConfig {
    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HubError::Config(e.to_string()))
    }

    /// Read config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HubError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), policy = config.policy.as_str(), "Hub config loaded");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| HubError::Config(e.to_string()))
    }
}
