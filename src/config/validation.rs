//! Scenario validation.
//!
//! Checks run in order and every problem is collected, so one pass reports
//! everything wrong with a config:
//!
//! 1. **Observer names**: non-empty and unique, since names are the only
//!    thing distinguishing observers in the printed output
//! 2. **Message template**: must contain `{state}` so every notification
//!    carries the new state
//!
//! Zero observers and zero updates are both valid; the scenario simply does
//! nothing observable.
//!
//! # Example
//! ```rust
//! use the_observer::config::{validate_config, Config, ObserverConfig};
//! use the_observer::errors::ValidationError;
//!
//! let mut config = Config::default();
//! config.observers.push(ObserverConfig::console("Observador 1"));
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::DuplicateObserverName { name: "Observador 1".to_string() }]
//! );
//! ```

use std::collections::HashSet;

use crate::config::consts::STATE_PLACEHOLDER;
use crate::config::Config;
use crate::errors::ValidationError;

/// Validate a scenario, returning every problem found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_observer_names(config);

    if !config.message_template.contains(STATE_PLACEHOLDER) {
        errors.push(ValidationError::TemplateMissingPlaceholder {
            template: config.message_template.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_observer_names(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for (position, observer) in config.observers.iter().enumerate() {
        // Surrounding whitespace is invisible in the printed line.
        let name = observer.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyObserverName { position });
            continue;
        }
        // Report each duplicated name once, however many times it repeats.
        if !seen.insert(name) && reported.insert(name) {
            errors.push(ValidationError::DuplicateObserverName {
                name: name.to_string(),
            });
        }
    }

    errors
}
