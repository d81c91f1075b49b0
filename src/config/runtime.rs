// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::sync::Arc;

use crate::config::{Config, ObserverKind};
use crate::errors::{FailureStrategy, RunError, UpdateFailure};
use crate::observers::{BareObserver, ConsoleObserver, RecordingObserver};
use crate::subjects::StateSubject;
use crate::traits::{Observer, ObserverRef, Subject};

/// A scenario wired up and ready to run.
pub struct Runtime {
    pub subject: StateSubject,
    pub observers: Vec<ObserverRef>,
    recorders: Vec<Arc<RecordingObserver>>,
    updates: Vec<String>,
}

impl Runtime {
    /// Apply every configured update in order.
    ///
    /// The subject's failure strategy also governs the run as a whole: with
    /// `FailFast` the run stops after the first update whose notification
    /// fails, with `ContinueOnError` every update is applied and all failed
    /// notifications are reported together. Either way the subject keeps the
    /// last applied state. Returns the total number of deliveries.
    pub fn run(&mut self) -> Result<usize, RunError> {
        let strategy = self.subject.failure_strategy();
        let mut delivered = 0;
        let mut applied = 0;
        let mut failures = Vec::new();

        for update in &self.updates {
            applied += 1;
            match self.subject.set_state(update.as_str()) {
                Ok(count) => delivered += count,
                Err(source) => {
                    delivered += source.delivered;
                    failures.push(UpdateFailure {
                        update: update.clone(),
                        source,
                    });
                    if strategy == FailureStrategy::FailFast {
                        break;
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(RunError {
                delivered,
                applied,
                configured: self.updates.len(),
                failures,
            })
        }
    }

    pub fn updates(&self) -> &[String] {
        &self.updates
    }

    /// Messages captured by the recording observer called `name`.
    pub fn recorded(&self, name: &str) -> Option<Vec<String>> {
        self.recorders
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.messages())
    }
}

/// Builds a [`Runtime`] from a scenario configuration.
///
/// # Example
/// ```
/// use the_observer::config::{Config, RuntimeBuilder};
/// use the_observer::traits::Subject;
///
/// let runtime = RuntimeBuilder::from_config_with_sink(&Config::default(), || Box::new(std::io::sink()));
///
/// assert_eq!(runtime.subject.get_state(), "Inicial");
/// assert_eq!(runtime.subject.observer_count(), 2);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Console observers print to stdout.
    pub fn from_config(cfg: &Config) -> Runtime {
        Self::from_config_with_sink(cfg, || Box::new(io::stdout()))
    }

    /// Console observers write to sinks produced by `sink`, one per observer.
    pub fn from_config_with_sink<F>(cfg: &Config, mut sink: F) -> Runtime
    where
        F: FnMut() -> Box<dyn Write + Send>,
    {
        let mut subject = StateSubject::with_options(
            cfg.initial_state.as_str(),
            cfg.message_template.as_str(),
            cfg.failure_strategy,
        );
        let mut observers = Vec::with_capacity(cfg.observers.len());
        let mut recorders = Vec::new();

        for observer_cfg in &cfg.observers {
            let observer: ObserverRef = match observer_cfg.kind {
                ObserverKind::Console => {
                    Arc::new(ConsoleObserver::with_writer(observer_cfg.name.as_str(), sink()))
                }
                ObserverKind::Recording => {
                    let recorder = Arc::new(RecordingObserver::new(observer_cfg.name.as_str()));
                    recorders.push(recorder.clone());
                    recorder
                }
                ObserverKind::Bare => Arc::new(BareObserver::new(observer_cfg.name.as_str())),
            };
            subject.add_observer(observer.clone());
            observers.push(observer);
        }

        Runtime {
            subject,
            observers,
            recorders,
            updates: cfg.updates.clone(),
        }
    }
}
