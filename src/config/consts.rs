/// Placeholder replaced by the new state value when rendering a message
pub const STATE_PLACEHOLDER: &str = "{state}";
/// Message sent to observers on every state change
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Estado actualizado a {state}";

/// Built-in demonstration scenario
pub const DEMO_INITIAL_STATE: &str = "Inicial";
pub const DEMO_OBSERVER_NAMES: [&str; 2] = ["Observador 1", "Observador 2"];
pub const DEMO_UPDATES: [&str; 1] = ["Nuevo estado"];
