// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use crate::errors::ObserverError;
use crate::traits::Observer;

/// Observer that keeps every message it receives, in arrival order.
///
/// Useful as a stand-in wherever a test or an embedding host needs to see
/// exactly what a subject delivered.
pub struct RecordingObserver {
    name: String,
    received: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn update_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.received.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl Observer for RecordingObserver {
    fn update(&self, message: &str) -> Result<(), ObserverError> {
        self.lock().push(message.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
