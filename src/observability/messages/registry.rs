// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for observer registration and removal.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Observer appended to a subject's list.
///
/// # Log Level
/// `debug!` - Routine bookkeeping
///
/// # Example
/// ```
/// use the_observer::observability::messages::registry::ObserverRegistered;
///
/// let msg = ObserverRegistered {
///     observer: "Observador 1",
///     position: 0,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ObserverRegistered<'a> {
    pub observer: &'a str,
    pub position: usize,
}

impl Display for ObserverRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' registered at position {}",
            self.observer, self.position
        )
    }
}

impl StructuredLog for ObserverRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            observer = self.observer,
            position = self.position,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "observer_registered",
            span_name = name,
            observer = self.observer,
            position = self.position,
        )
    }
}

/// Observer handle was already registered; add was a no-op.
///
/// # Log Level
/// `debug!` - Expected, tolerated by contract
pub struct ObserverAlreadyRegistered<'a> {
    pub observer: &'a str,
}

impl Display for ObserverAlreadyRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' is already registered, ignoring",
            self.observer
        )
    }
}

impl StructuredLog for ObserverAlreadyRegistered<'_> {
    fn log(&self) {
        tracing::debug!(observer = self.observer, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "observer_already_registered",
            span_name = name,
            observer = self.observer,
        )
    }
}

/// Observer removed from a subject's list.
///
/// # Log Level
/// `debug!` - Routine bookkeeping
pub struct ObserverRemoved<'a> {
    pub observer: &'a str,
    pub remaining: usize,
}

impl Display for ObserverRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' removed, {} remaining",
            self.observer, self.remaining
        )
    }
}

impl StructuredLog for ObserverRemoved<'_> {
    fn log(&self) {
        tracing::debug!(
            observer = self.observer,
            remaining = self.remaining,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "observer_removed",
            span_name = name,
            observer = self.observer,
            remaining = self.remaining,
        )
    }
}

/// Removal requested for an observer that is not registered.
///
/// # Log Level
/// `warn!` - Caller misuse, surfaced as an error to the caller
///
/// # Example
/// ```
/// use the_observer::observability::messages::registry::ObserverNotFound;
///
/// let msg = ObserverNotFound { observer: "Observador 3" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ObserverNotFound<'a> {
    pub observer: &'a str,
}

impl Display for ObserverNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cannot remove observer '{}': not registered",
            self.observer
        )
    }
}

impl StructuredLog for ObserverNotFound<'_> {
    fn log(&self) {
        tracing::warn!(observer = self.observer, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "observer_not_found",
            span_name = name,
            observer = self.observer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_message_wording() {
        let registered = ObserverRegistered {
            observer: "Observador 1",
            position: 0,
        };
        assert_eq!(
            registered.to_string(),
            "Observer 'Observador 1' registered at position 0"
        );

        let removed = ObserverRemoved {
            observer: "Observador 1",
            remaining: 1,
        };
        assert_eq!(removed.to_string(), "Observer 'Observador 1' removed, 1 remaining");

        let missing = ObserverNotFound { observer: "ghost" };
        assert!(missing.to_string().contains("not registered"));
    }
}
