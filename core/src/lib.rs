//! devports Core Library
//!
//! Discovers listening TCP/UDP sockets on common development ports
//! (3000-3999, 5000-5999, 8080 and 80) and annotates each with the owning
//! process and a human-readable description.
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models and lookup tables
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: Command execution and tool output parsers
//! - `application`: The discovery service
//!
//! # External tools
//! Discovery shells out to `which`, `ss`, `grep` and `lsof`. Missing tools
//! and failing sub-queries are reported in the returned
//! [`DiscoveryReport`] rather than raised.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export domain types (primary API)
pub use domain::{
    describe, CapabilityReport, DiscoveryReport, PortDescriptionTable, PortGroup, PortRecord,
    ProcessIdentity, Protocol, TargetPorts,
};

// Re-export other commonly used types
pub use adapters::SystemCommandRunner;
pub use application::PortDiscoveryService;
pub use config::{ConfigStore, DiscoveryConfig};
pub use error::{DiscoveryError, Error, Result};
pub use ports::CommandRunner;

/// Discover target ports on this host with the default configuration.
pub async fn discover_ports() -> DiscoveryReport {
    PortDiscoveryService::system(DiscoveryConfig::default())
        .discover_ports()
        .await
}

/// Probe this host for the tools discovery needs.
pub async fn check_requirements() -> CapabilityReport {
    PortDiscoveryService::system(DiscoveryConfig::default())
        .check_requirements()
        .await
}
