// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for notification dispatch.
//!
//! This module contains message types for logging events related to:
//! * The start and end of a notification round
//! * Successful delivery to a single observer
//! * An observer's `update` failing

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Notification round started.
///
/// # Log Level
/// `debug!` - Routine; one per `notify` call
pub struct NotificationStarted<'a> {
    pub message: &'a str,
    pub observer_count: usize,
    pub strategy: &'a str,
}

impl Display for NotificationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Notifying {} observers (strategy={}): {}",
            self.observer_count, self.strategy, self.message
        )
    }
}

impl StructuredLog for NotificationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            observer_count = self.observer_count,
            strategy = self.strategy,
            payload = self.message,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "notification",
            span_name = name,
            observer_count = self.observer_count,
            strategy = self.strategy,
        )
    }
}

/// A single observer accepted the message.
///
/// # Log Level
/// `trace!` - Per-observer detail
pub struct ObserverNotified<'a> {
    pub observer: &'a str,
    pub position: usize,
}

impl Display for ObserverNotified<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' (position {}) notified",
            self.observer, self.position
        )
    }
}

impl StructuredLog for ObserverNotified<'_> {
    fn log(&self) {
        tracing::trace!(
            observer = self.observer,
            position = self.position,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "observer_notified",
            span_name = name,
            observer = self.observer,
            position = self.position,
        )
    }
}

/// An observer's `update` returned an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_observer::errors::ObserverError;
/// use the_observer::observability::messages::notification::ObserverUpdateFailed;
///
/// let error = ObserverError::NotImplemented { observer: "bare".to_string() };
/// let msg = ObserverUpdateFailed {
///     observer: "bare",
///     position: 1,
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ObserverUpdateFailed<'a> {
    pub observer: &'a str,
    pub position: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for ObserverUpdateFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' (position {}) failed to handle notification: {}",
            self.observer, self.position, self.error
        )
    }
}

impl StructuredLog for ObserverUpdateFailed<'_> {
    fn log(&self) {
        tracing::error!(
            observer = self.observer,
            position = self.position,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "observer_update_failed",
            span_name = name,
            observer = self.observer,
            position = self.position,
        )
    }
}

/// Notification round finished, successfully or not.
///
/// # Log Level
/// `debug!` when every observer was notified, `warn!` otherwise
pub struct NotificationCompleted {
    pub delivered: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Display for NotificationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Notification completed: delivered={}, failed={}, skipped={}",
            self.delivered, self.failed, self.skipped
        )
    }
}

impl StructuredLog for NotificationCompleted {
    fn log(&self) {
        if self.failed == 0 && self.skipped == 0 {
            tracing::debug!(
                delivered = self.delivered,
                failed = self.failed,
                skipped = self.skipped,
                "{}", self
            );
        } else {
            tracing::warn!(
                delivered = self.delivered,
                failed = self.failed,
                skipped = self.skipped,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "notification_completed",
            span_name = name,
            delivered = self.delivered,
            failed = self.failed,
            skipped = self.skipped,
        )
    }
}
