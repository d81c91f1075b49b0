// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Subject state overwritten by `set_state`.
///
/// # Log Level
/// `info!` - The one operational event of the demo
///
/// # Example
/// ```
/// use the_observer::observability::messages::subject::StateChanged;
///
/// let msg = StateChanged {
///     previous: "Inicial",
///     current: "Nuevo estado",
/// };
///
/// assert_eq!(msg.to_string(), "State changed: 'Inicial' -> 'Nuevo estado'");
/// ```
pub struct StateChanged<'a> {
    pub previous: &'a str,
    pub current: &'a str,
}

impl Display for StateChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "State changed: '{}' -> '{}'",
            self.previous, self.current
        )
    }
}

impl StructuredLog for StateChanged<'_> {
    fn log(&self) {
        tracing::info!(
            previous = self.previous,
            current = self.current,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "state_change",
            span_name = name,
            previous = self.previous,
            current = self.current,
        )
    }
}
