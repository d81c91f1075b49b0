// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Notification failures and the policy that decides how far a failing
//! notification gets.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::errors::ObserverError;

/// How a subject reacts when an observer's `update` fails mid-notification.
///
/// # Variants
/// * `FailFast` - Stop at the first failure; later observers are not notified
/// * `ContinueOnError` - Notify everyone, then report every failure together
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    #[default]
    FailFast,
    ContinueOnError,
}

impl fmt::Display for FailureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureStrategy::FailFast => write!(f, "fail_fast"),
            FailureStrategy::ContinueOnError => write!(f, "continue_on_error"),
        }
    }
}

/// One observer that did not accept a notification.
#[derive(Debug, Error)]
#[error("observer #{position} ('{observer}'): {source}")]
pub struct DeliveryFailure {
    /// Zero-based registration position of the failing observer.
    pub position: usize,
    pub observer: String,
    #[source]
    pub source: ObserverError,
}

/// A notification that did not reach every registered observer cleanly.
#[derive(Debug)]
pub struct NotifyError {
    /// Observers whose `update` returned `Ok`.
    pub delivered: usize,
    /// Observers whose `update` was called at all.
    pub attempted: usize,
    /// Observers registered when the notification started.
    pub registered: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl NotifyError {
    /// Observers that were never visited because dispatch stopped early.
    pub fn skipped(&self) -> usize {
        self.registered - self.attempted
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Notification failed for {} of {} observers ({} delivered, {} skipped)",
            self.failures.len(),
            self.registered,
            self.delivered,
            self.skipped()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for NotifyError {}

/// One configured update whose notification failed.
#[derive(Debug, Error)]
#[error("update '{update}': {source}")]
pub struct UpdateFailure {
    pub update: String,
    #[source]
    pub source: NotifyError,
}

/// A scenario run in which at least one update's notification failed.
#[derive(Debug)]
pub struct RunError {
    /// Successful deliveries summed over every applied update.
    pub delivered: usize,
    /// Updates passed to `set_state`, failed ones included.
    pub applied: usize,
    /// Updates configured for the run.
    pub configured: usize,
    pub failures: Vec<UpdateFailure>,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} updates failed to notify every observer ({} applied, {} deliveries)",
            self.failures.len(),
            self.configured,
            self.applied,
            self.delivered
        )?;
        for failure in &self.failures {
            write!(f, "\n  {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for RunError {}
