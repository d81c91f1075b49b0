// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MESSAGE_TEMPLATE, STATE_PLACEHOLDER};
use crate::errors::{FailureStrategy, NotifyError};
use crate::observability::messages::{subject::StateChanged, StructuredLog};
use crate::registry::ObserverList;
use crate::traits::Subject;

/// Substitute `state` for every `{state}` in `template`.
///
/// # Example
/// ```
/// use the_observer::subjects::render_message;
///
/// assert_eq!(
///     render_message("Estado actualizado a {state}", "Nuevo estado"),
///     "Estado actualizado a Nuevo estado"
/// );
/// ```
pub fn render_message(template: &str, state: &str) -> String {
    template.replace(STATE_PLACEHOLDER, state)
}

/// Subject carrying a single string state.
///
/// Every `set_state` stores the value and then notifies all registered
/// observers once, with a message rendered from the template.
#[derive(Debug)]
pub struct StateSubject {
    state: String,
    template: String,
    failure_strategy: FailureStrategy,
    observers: ObserverList,
}

impl StateSubject {
    pub fn new(initial_state: impl Into<String>) -> Self {
        Self::with_options(
            initial_state,
            DEFAULT_MESSAGE_TEMPLATE,
            FailureStrategy::default(),
        )
    }

    pub fn with_options(
        initial_state: impl Into<String>,
        template: impl Into<String>,
        failure_strategy: FailureStrategy,
    ) -> Self {
        Self {
            state: initial_state.into(),
            template: template.into(),
            failure_strategy,
            observers: ObserverList::new(),
        }
    }

    pub fn get_state(&self) -> &str {
        &self.state
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Overwrite the state and notify every observer.
    ///
    /// The new state is kept even when notification fails. Returns the
    /// number of observers that received the message.
    pub fn set_state(&mut self, state: impl Into<String>) -> Result<usize, NotifyError> {
        let previous = std::mem::replace(&mut self.state, state.into());

        let change = StateChanged {
            previous: &previous,
            current: &self.state,
        };
        let span = change.span("set_state");
        let _guard = span.enter();
        change.log();

        let message = render_message(&self.template, &self.state);
        self.notify(&message)
    }
}

impl Subject for StateSubject {
    fn observers(&self) -> &ObserverList {
        &self.observers
    }

    fn observers_mut(&mut self) -> &mut ObserverList {
        &mut self.observers
    }

    fn failure_strategy(&self) -> FailureStrategy {
        self.failure_strategy
    }
}
