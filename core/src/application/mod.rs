//! Application layer - Use case services.
//!
//! Services here orchestrate domain logic and adapter interactions. They
//! depend on ports (traits) for external systems so different
//! implementations can be injected.

mod discovery;

pub use discovery::{PortDiscoveryService, LISTENER_FILTER_COMMAND, REQUIRED_TOOLS};
