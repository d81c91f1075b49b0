// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::sync::Mutex;

use crate::errors::ObserverError;
use crate::traits::Observer;

/// The line a console observer prints for each message.
pub struct ReceivedLine<'a> {
    pub observer: &'a str,
    pub message: &'a str,
}

impl Display for ReceivedLine<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} has received the message: {}",
            self.observer, self.message
        )
    }
}

/// Observer that prints every message it receives, one line per message.
///
/// Writes to stdout unless built with [`ConsoleObserver::with_writer`].
pub struct ConsoleObserver {
    name: String,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_writer(name, io::stdout())
    }

    pub fn with_writer(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            sink: Mutex::new(Box::new(writer)),
        }
    }
}

impl Observer for ConsoleObserver {
    fn update(&self, message: &str) -> Result<(), ObserverError> {
        let line = ReceivedLine {
            observer: &self.name,
            message,
        };

        // A panic in another writer leaves the sink usable; keep printing.
        let mut sink = self.sink.lock().unwrap_or_else(|p| p.into_inner());
        writeln!(sink, "{}", line)
            .and_then(|_| sink.flush())
            .map_err(|source| ObserverError::Io {
                observer: self.name.clone(),
                source,
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
