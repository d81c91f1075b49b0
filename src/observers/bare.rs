// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::Observer;

/// Observer that takes the contract's default `update`.
///
/// Every notification it receives fails with `ObserverError::NotImplemented`.
pub struct BareObserver {
    name: String,
}

impl BareObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for BareObserver {
    fn name(&self) -> &str {
        &self.name
    }
}
