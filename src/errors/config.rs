// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a scenario configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// An observer was configured with an empty (or whitespace) name
    #[error("Observer at position {position} has an empty name")]
    EmptyObserverName { position: usize },

    /// Two observers share a name, so their output would be indistinguishable
    #[error("Duplicate observer name: '{name}'")]
    DuplicateObserverName { name: String },

    /// The message template would not carry the new state value
    #[error("Message template '{template}' does not contain the {{state}} placeholder")]
    TemplateMissingPlaceholder { template: String },
}

/// Errors that can occur while loading a scenario configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported config format for '{}' (expected .yaml, .yml or .toml)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
