// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by an observer while handling a message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserverError {
    /// The observer relies on the contract's default `update`.
    #[error("Observer '{observer}' does not implement update")]
    NotImplemented { observer: String },

    /// Writing the received message to the observer's sink failed.
    #[error("Observer '{observer}' failed to write message: {source}")]
    Io {
        observer: String,
        #[source]
        source: std::io::Error,
    },

    /// The observer refused the message.
    #[error("Observer '{observer}' rejected message: {reason}")]
    Rejected { observer: String, reason: String },
}

impl ObserverError {
    /// Name of the observer that produced the error.
    pub fn observer(&self) -> &str {
        match self {
            ObserverError::NotImplemented { observer }
            | ObserverError::Io { observer, .. }
            | ObserverError::Rejected { observer, .. } => observer,
        }
    }
}
