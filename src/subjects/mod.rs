// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod state_subject;

#[cfg(test)]
mod integration_tests;

pub use state_subject::{render_message, StateSubject};
