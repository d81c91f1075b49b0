pub mod observer;
pub mod subject;

pub use observer::{Observer, ObserverRef};
pub use subject::Subject;
