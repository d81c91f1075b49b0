// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod bare;
mod console;
mod recording;

pub use bare::BareObserver;
pub use console::{ConsoleObserver, ReceivedLine};
pub use recording::RecordingObserver;
