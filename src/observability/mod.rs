// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic logging in the crate goes through the message types in
//! [`messages`]. Each type implements `Display` for the human-readable line
//! and [`messages::StructuredLog`] for the structured `tracing` event, which
//! keeps log wording in one place instead of scattered format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::registry` - Observer registration and removal
//! * `messages::notification` - Notification dispatch and observer failures
//! * `messages::subject` - Subject state changes
//!
//! # Usage
//!
//! ```rust
//! use the_observer::observability::messages::{registry::ObserverRegistered, StructuredLog};
//!
//! ObserverRegistered {
//!     observer: "Observador 1",
//!     position: 0,
//! }
//! .log();
//! ```
//!
//! Nothing is emitted unless the host installs a subscriber; the binary
//! does so with [`init_tracing`].

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a `tracing-subscriber` fmt layer writing to stderr.
///
/// Standard output is reserved for observer output, so all log lines go to
/// stderr. Calling this twice is harmless; the second call is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
