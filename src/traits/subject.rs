use crate::errors::{FailureStrategy, NotifyError, SubjectError};
use crate::registry::ObserverList;
use crate::traits::ObserverRef;

/// Capability contract for anything that owns a set of observers.
///
/// Implementors only expose their `ObserverList`; registration, removal and
/// dispatch come from the provided methods so every subject behaves the same.
pub trait Subject {
    fn observers(&self) -> &ObserverList;

    fn observers_mut(&mut self) -> &mut ObserverList;

    /// How `notify` reacts to a failing observer.
    fn failure_strategy(&self) -> FailureStrategy {
        FailureStrategy::default()
    }

    /// Register `observer` at the end of the list. Returns `false` when the
    /// same handle is already registered, in which case nothing changes.
    fn add_observer(&mut self, observer: ObserverRef) -> bool {
        self.observers_mut().add(observer)
    }

    /// Unregister `observer`. Removing an observer that is not registered is
    /// an error, unlike re-adding one.
    fn remove_observer(&mut self, observer: &ObserverRef) -> Result<(), SubjectError> {
        self.observers_mut().remove(observer)
    }

    /// Deliver `message` to every registered observer in registration order.
    fn notify(&self, message: &str) -> Result<usize, NotifyError> {
        self.observers().dispatch(message, self.failure_strategy())
    }

    fn observer_count(&self) -> usize {
        self.observers().len()
    }

    fn contains_observer(&self, observer: &ObserverRef) -> bool {
        self.observers().contains(observer)
    }
}
