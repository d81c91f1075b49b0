// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod observer_list;

pub use observer_list::{ObserverKey, ObserverList};
