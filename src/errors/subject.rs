// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors from managing a subject's observer collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubjectError {
    /// `remove_observer` was called with a handle that is not registered.
    #[error("Observer '{observer}' is not registered with this subject")]
    ObserverNotFound { observer: String },
}
