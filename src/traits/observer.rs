use std::sync::Arc;

use crate::errors::ObserverError;

/// Shared handle to a registered observer.
///
/// Subjects hold clones of the handle; the caller keeps its own, so an
/// observer's lifetime never depends on the subject it is registered with.
pub type ObserverRef = Arc<dyn Observer>;

/// Capability contract for anything that wants to hear about state changes.
///
/// The provided `update` is a safety net: concrete observers are expected to
/// override it, and reaching the default reports `ObserverError::NotImplemented`.
pub trait Observer: Send + Sync {
    fn update(&self, _message: &str) -> Result<(), ObserverError> {
        Err(ObserverError::NotImplemented {
            observer: self.name().to_string(),
        })
    }

    /// Label used in output and logs. Not an identity key.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
