//! Machine configuration.
//!
//! Configuration is plain data: it can be built in code or loaded from JSON
//! alongside the rest of a host application's settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name used in log records when a machine has none configured.
pub const DEFAULT_MACHINE_NAME: &str = "fsm";

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid machine configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What `notify` does once a machine has been stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterStop {
    /// Events delivered to a stopped machine are dropped.
    #[default]
    Ignore,

    /// A stopped machine keeps resolving and firing transitions from the
    /// state it was stopped in.
    Dispatch,
}

/// Settings for a [`Machine`](crate::Machine).
///
/// # Example
///
/// ```rust
/// use featherstate::{AfterStop, MachineConfig};
///
/// let config = MachineConfig::from_json(r#"{ "name": "keyboard", "after_stop": "dispatch" }"#)
///     .unwrap();
///
/// assert_eq!(config.name.as_deref(), Some("keyboard"));
/// assert_eq!(config.after_stop, AfterStop::Dispatch);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Name attached to every log record the machine emits.
    pub name: Option<String>,

    /// Post-stop dispatch policy.
    pub after_stop: AfterStop,
}

impl MachineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the name used in log records.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the post-stop dispatch policy.
    pub fn with_after_stop(mut self, policy: AfterStop) -> Self {
        self.after_stop = policy;
        self
    }

    /// Name used in log records.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_MACHINE_NAME)
    }
}
