// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod notify;
mod observer;
mod subject;

pub use config::{ConfigError, ValidationError};
pub use notify::{DeliveryFailure, FailureStrategy, NotifyError, RunError, UpdateFailure};
pub use observer::ObserverError;
pub use subject::SubjectError;
