// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_MESSAGE_TEMPLATE, DEMO_INITIAL_STATE, DEMO_OBSERVER_NAMES, DEMO_UPDATES,
};
use crate::errors::{ConfigError, FailureStrategy};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A complete observer scenario: one subject, its observers, and the
/// sequence of state changes to apply.
///
/// # Fields
/// * `initial_state` - State the subject starts with
/// * `message_template` - Notification text; `{state}` becomes the new state (optional)
/// * `failure_strategy` - How a failing observer affects a notification (optional, defaults to FailFast)
/// * `observers` - Observers to register, in registration order
/// * `updates` - Values passed to `set_state`, in order
///
/// # Example
/// ```yaml
/// initial_state: Inicial
/// failure_strategy: fail_fast
/// observers:
///   - name: Observador 1
///   - name: Observador 2
/// updates:
///   - Nuevo estado
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub initial_state: String,
    #[serde(default = "default_message_template")]
    pub message_template: String,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub observers: Vec<ObserverConfig>,
    #[serde(default)]
    pub updates: Vec<String>,
}

fn default_message_template() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}

impl Default for Config {
    /// The built-in demonstration: two console observers, one state change.
    fn default() -> Self {
        Self {
            initial_state: DEMO_INITIAL_STATE.to_string(),
            message_template: default_message_template(),
            failure_strategy: FailureStrategy::default(),
            observers: DEMO_OBSERVER_NAMES
                .iter()
                .map(|name| ObserverConfig::console(*name))
                .collect(),
            updates: DEMO_UPDATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Configuration for a single observer.
///
/// ```yaml
/// name: "audit"
/// kind: recording
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ObserverConfig {
    pub name: String,
    #[serde(default)]
    pub kind: ObserverKind,
}

impl ObserverConfig {
    pub fn console(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObserverKind::Console,
        }
    }
}

/// Which observer implementation a configured observer uses.
///
/// # Variants
/// * `Console` - Prints each message to stdout
/// * `Recording` - Keeps messages in memory
/// * `Bare` - Relies on the default `update`, so every notification fails
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObserverKind {
    #[default]
    Console,
    Recording,
    Bare,
}

/// Parse a YAML scenario.
pub fn parse_yaml(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a TOML scenario.
pub fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a scenario from a `.yaml`/`.yml` or `.toml` file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let read = || {
        fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml(&read()?),
        Some("toml") => parse_toml(&read()?),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a scenario and reject it if validation finds any problem.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
