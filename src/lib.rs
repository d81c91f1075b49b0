// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // scenario config + runtime
pub mod errors;     // error handling
pub mod observability;
pub mod observers;  // concrete observers
pub mod registry;   // identity-keyed observer collection
pub mod subjects;   // concrete subjects
pub mod traits;     // Observer / Subject contracts
