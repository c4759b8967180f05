//! Domain layer - Pure data models and lookup tables.
//!
//! These types have no I/O dependencies and can be tested in isolation.

mod description;
mod port;
mod report;
mod targets;

pub use description::{describe, PortDescriptionTable, DEFAULT_DESCRIPTION};
pub use port::{Listener, PortGroup, PortRecord, ProcessIdentity, Protocol, UNKNOWN};
pub use report::{CapabilityReport, DiscoveryReport};
pub use targets::TargetPorts;
