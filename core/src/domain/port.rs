//! Port record domain models.

use serde::{Deserialize, Serialize};

/// Placeholder used when a process field cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

// ============================================================================
// Protocol
// ============================================================================

/// Transport protocol of a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    /// Infer the protocol from a raw listener line.
    ///
    /// Any line that does not mention `tcp` (case-insensitive) is UDP,
    /// including lines that mention neither protocol.
    pub fn infer(line: &str) -> Self {
        if line.to_lowercase().contains("tcp") {
            Protocol::Tcp
        } else {
            Protocol::Udp
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Listener
// ============================================================================

/// A listening socket extracted from one line of socket-listing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub port: u16,
    pub protocol: Protocol,
}

// ============================================================================
// ProcessIdentity
// ============================================================================

/// The process owning a port, as reported by the lookup tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessIdentity {
    pub process_name: String,
    pub pid: String,
}

impl ProcessIdentity {
    pub fn new(process_name: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            pid: pid.into(),
        }
    }

    /// Identity used when resolution fails.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN)
    }

    pub fn is_unknown(&self) -> bool {
        self.process_name == UNKNOWN && self.pid == UNKNOWN
    }
}

impl Default for ProcessIdentity {
    fn default() -> Self {
        Self::unknown()
    }
}

// ============================================================================
// PortRecord
// ============================================================================

/// A discovered listening port with its process and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRecord {
    /// The port number (e.g., 3000, 8080).
    pub port: u16,
    /// Protocol inferred from the listener line.
    pub protocol: Protocol,
    /// Name of the owning process, or `"Unknown"`.
    pub process_name: String,
    /// PID of the owning process, or `"Unknown"`.
    pub pid: String,
    /// Human-readable label from the well-known port table.
    pub description: String,
}

impl PortRecord {
    pub fn new(
        listener: Listener,
        identity: ProcessIdentity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            port: listener.port,
            protocol: listener.protocol,
            process_name: identity.process_name,
            pid: identity.pid,
            description: description.into(),
        }
    }

    /// Get the formatted port number for display (e.g., ":3000").
    pub fn display_port(&self) -> String {
        format!(":{}", self.port)
    }

    /// Presentation group of this record, if the port is a target port.
    pub fn group(&self) -> Option<PortGroup> {
        PortGroup::of(self.port)
    }

    /// Check if this record matches a search query.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query_lower = query.to_lowercase();
        self.process_name.to_lowercase().contains(&query_lower)
            || self.port.to_string().contains(&query_lower)
            || self.pid.to_lowercase().contains(&query_lower)
            || self.protocol.as_str().to_lowercase().contains(&query_lower)
            || self.description.to_lowercase().contains(&query_lower)
    }
}

impl std::fmt::Display for PortRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} (PID: {}, Process: {})",
            self.port, self.protocol, self.pid, self.process_name
        )
    }
}

// ============================================================================
// PortGroup
// ============================================================================

/// Display grouping of target ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortGroup {
    /// Ports 80 and 8080.
    Web,
    /// Ports 3000-3999.
    Development,
    /// Ports 5000-5999.
    Application,
}

impl PortGroup {
    /// All groups in display order.
    pub const ALL: [PortGroup; 3] = [PortGroup::Web, PortGroup::Development, PortGroup::Application];

    pub fn of(port: u16) -> Option<Self> {
        match port {
            80 | 8080 => Some(PortGroup::Web),
            3000..=3999 => Some(PortGroup::Development),
            5000..=5999 => Some(PortGroup::Application),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PortGroup::Web => "Web Ports",
            PortGroup::Development => "Development Ports (3000-3999)",
            PortGroup::Application => "Application Ports (5000-5999)",
        }
    }

    /// Short service label shown next to each record.
    pub fn service_kind(&self) -> &'static str {
        match self {
            PortGroup::Web => "Web Service",
            PortGroup::Development | PortGroup::Application => "Application Service",
        }
    }
}

impl std::fmt::Display for PortGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.title())
    }
}
