// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered, identity-keyed collection of observers.
//!
//! Membership is decided by handle identity ([`ObserverKey`]), never by
//! comparing observer values: two observers with the same name are two
//! registrations. Insertion order is the notification order.

use std::fmt;
use std::sync::Arc;

use crate::errors::{DeliveryFailure, FailureStrategy, NotifyError, SubjectError};
use crate::observability::messages::{notification::*, registry::*, StructuredLog};
use crate::traits::ObserverRef;

/// Identity of an observer handle: the address of the shared allocation.
///
/// Only the data pointer is used, so the same observer seen through
/// different trait-object vtables still compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverKey(usize);

impl ObserverKey {
    pub fn of(observer: &ObserverRef) -> Self {
        Self(Arc::as_ptr(observer) as *const () as usize)
    }
}

/// Observers registered with a subject, in registration order.
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<ObserverRef>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn contains(&self, observer: &ObserverRef) -> bool {
        self.position(observer).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObserverRef> {
        self.observers.iter()
    }

    /// Observer names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    /// Append `observer` unless that handle is already present.
    ///
    /// Returns `true` when the observer was added.
    pub fn add(&mut self, observer: ObserverRef) -> bool {
        if self.contains(&observer) {
            ObserverAlreadyRegistered {
                observer: observer.name(),
            }
            .log();
            return false;
        }

        ObserverRegistered {
            observer: observer.name(),
            position: self.observers.len(),
        }
        .log();
        self.observers.push(observer);
        true
    }

    /// Remove exactly the given handle, preserving the order of the rest.
    pub fn remove(&mut self, observer: &ObserverRef) -> Result<(), SubjectError> {
        let Some(index) = self.position(observer) else {
            ObserverNotFound {
                observer: observer.name(),
            }
            .log();
            return Err(SubjectError::ObserverNotFound {
                observer: observer.name().to_string(),
            });
        };

        let removed = self.observers.remove(index);
        ObserverRemoved {
            observer: removed.name(),
            remaining: self.observers.len(),
        }
        .log();
        Ok(())
    }

    /// Call `update(message)` on each observer in order.
    ///
    /// Returns the number of observers notified. With `FailFast` dispatch
    /// stops at the first failure; with `ContinueOnError` every observer is
    /// visited and all failures are reported together. Either way observers
    /// visited before a failure keep their notification.
    pub fn dispatch(&self, message: &str, strategy: FailureStrategy) -> Result<usize, NotifyError> {
        let strategy_label = strategy.to_string();
        let start_msg = NotificationStarted {
            message,
            observer_count: self.observers.len(),
            strategy: &strategy_label,
        };
        let span = start_msg.span("notify");
        let _guard = span.enter();
        start_msg.log();

        let mut delivered = 0;
        let mut attempted = 0;
        let mut failures = Vec::new();

        for (position, observer) in self.observers.iter().enumerate() {
            attempted += 1;
            match observer.update(message) {
                Ok(()) => {
                    delivered += 1;
                    ObserverNotified {
                        observer: observer.name(),
                        position,
                    }
                    .log();
                }
                Err(error) => {
                    ObserverUpdateFailed {
                        observer: observer.name(),
                        position,
                        error: &error,
                    }
                    .log();
                    failures.push(DeliveryFailure {
                        position,
                        observer: observer.name().to_string(),
                        source: error,
                    });
                    if strategy == FailureStrategy::FailFast {
                        break;
                    }
                }
            }
        }

        NotificationCompleted {
            delivered,
            failed: failures.len(),
            skipped: self.observers.len() - attempted,
        }
        .log();

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(NotifyError {
                delivered,
                attempted,
                registered: self.observers.len(),
                failures,
            })
        }
    }

    fn position(&self, observer: &ObserverRef) -> Option<usize> {
        let key = ObserverKey::of(observer);
        self.observers.iter().position(|o| ObserverKey::of(o) == key)
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ObserverError;
    use crate::observers::{BareObserver, RecordingObserver};
    use crate::traits::Observer;

    /// Observer that refuses every message.
    struct RejectingObserver;

    impl Observer for RejectingObserver {
        fn update(&self, message: &str) -> Result<(), ObserverError> {
            Err(ObserverError::Rejected {
                observer: self.name().to_string(),
                reason: format!("will not accept '{}'", message),
            })
        }

        fn name(&self) -> &str {
            "rejecting"
        }
    }

    fn recorder(name: &str) -> (Arc<RecordingObserver>, ObserverRef) {
        let observer = Arc::new(RecordingObserver::new(name));
        let handle: ObserverRef = observer.clone();
        (observer, handle)
    }

    #[test]
    fn test_add_keeps_first_insertion_order_and_ignores_duplicates() {
        let (_, a) = recorder("a");
        let (_, b) = recorder("b");
        let (_, c) = recorder("c");
        let mut list = ObserverList::new();

        assert!(list.add(a.clone()));
        assert!(list.add(b.clone()));
        assert!(!list.add(a.clone()));
        assert!(list.add(c.clone()));
        assert!(!list.add(b.clone()));
        assert!(!list.add(c.clone()));

        assert_eq!(list.len(), 3);
        assert_eq!(list.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_same_name_different_handles_are_distinct() {
        let (_, first) = recorder("twin");
        let (_, second) = recorder("twin");
        let mut list = ObserverList::new();

        assert!(list.add(first.clone()));
        assert!(list.add(second.clone()));
        assert_eq!(list.len(), 2);

        list.remove(&first).unwrap();
        assert!(!list.contains(&first));
        assert!(list.contains(&second));
    }

    #[test]
    fn test_cloned_handle_shares_identity() {
        let (_, a) = recorder("a");
        let alias = a.clone();
        let mut list = ObserverList::new();

        list.add(a);
        assert!(list.contains(&alias));
        assert!(!list.add(alias));
    }

    #[test]
    fn test_remove_present_observer_removes_exactly_that_identity() {
        let (_, a) = recorder("a");
        let (_, b) = recorder("b");
        let (_, c) = recorder("c");
        let mut list = ObserverList::new();
        list.add(a.clone());
        list.add(b.clone());
        list.add(c.clone());

        list.remove(&b).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.names(), vec!["a", "c"]);
        assert!(!list.contains(&b));
    }

    #[test]
    fn test_remove_absent_observer_fails_and_leaves_list_unchanged() {
        let (_, a) = recorder("a");
        let (_, stranger) = recorder("stranger");
        let mut list = ObserverList::new();
        list.add(a.clone());

        let err = list.remove(&stranger).unwrap_err();

        assert_eq!(
            err,
            SubjectError::ObserverNotFound {
                observer: "stranger".to_string()
            }
        );
        assert_eq!(list.names(), vec!["a"]);
    }

    #[test]
    fn test_remove_twice_fails_the_second_time() {
        let (_, a) = recorder("a");
        let mut list = ObserverList::new();
        list.add(a.clone());

        assert!(list.remove(&a).is_ok());
        assert!(list.remove(&a).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_dispatch_delivers_identical_message_once_each() {
        let (ra, a) = recorder("a");
        let (rb, b) = recorder("b");
        let mut list = ObserverList::new();
        list.add(a);
        list.add(b);

        let delivered = list.dispatch("ping", FailureStrategy::FailFast).unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(ra.messages(), vec!["ping".to_string()]);
        assert_eq!(rb.messages(), vec!["ping".to_string()]);
    }

    #[test]
    fn test_dispatch_to_empty_list_is_ok() {
        let list = ObserverList::new();
        assert_eq!(list.dispatch("nobody", FailureStrategy::FailFast).unwrap(), 0);
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let (before, a) = recorder("before");
        let failing: ObserverRef = Arc::new(RejectingObserver);
        let (after, c) = recorder("after");
        let mut list = ObserverList::new();
        list.add(a);
        list.add(failing);
        list.add(c);

        let err = list.dispatch("msg", FailureStrategy::FailFast).unwrap_err();

        assert_eq!(before.update_count(), 1);
        assert_eq!(after.update_count(), 0);
        assert_eq!(err.delivered, 1);
        assert_eq!(err.attempted, 2);
        assert_eq!(err.skipped(), 1);
        assert_eq!(err.failures.len(), 1);
        assert_eq!(err.failures[0].position, 1);
        assert_eq!(err.failures[0].observer, "rejecting");
    }

    #[test]
    fn test_continue_on_error_visits_everyone_and_collects_failures() {
        let (before, a) = recorder("before");
        let rejecting: ObserverRef = Arc::new(RejectingObserver);
        let bare: ObserverRef = Arc::new(BareObserver::new("bare"));
        let (after, d) = recorder("after");
        let mut list = ObserverList::new();
        list.add(a);
        list.add(rejecting);
        list.add(bare);
        list.add(d);

        let err = list
            .dispatch("msg", FailureStrategy::ContinueOnError)
            .unwrap_err();

        assert_eq!(before.update_count(), 1);
        assert_eq!(after.update_count(), 1);
        assert_eq!(err.delivered, 2);
        assert_eq!(err.skipped(), 0);
        assert_eq!(
            err.failures.iter().map(|f| f.position).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(matches!(
            err.failures[1].source,
            ObserverError::NotImplemented { .. }
        ));
        assert!(err.to_string().contains("Notification failed for 2 of 4 observers"));
    }
}
