// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `registry` - Observer registration and removal
//! * `notification` - Notification dispatch lifecycle and per-observer failures
//! * `subject` - Subject state changes
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_observer::observability::messages::notification::NotificationStarted;
//!
//! let msg = NotificationStarted {
//!     message: "Estado actualizado a Nuevo estado",
//!     observer_count: 2,
//!     strategy: "fail_fast",
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod notification;
pub mod registry;
pub mod subject;

use tracing::Span;

/// A message that knows how to emit itself as a structured `tracing` event.
///
/// `log` emits the event at the level the message type is documented with;
/// `span` opens a span carrying the same fields so nested events inherit them.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
