//! Results returned to callers of the discovery pipeline.

use serde::{Deserialize, Serialize};

use super::{PortGroup, PortRecord};
use crate::error::DiscoveryError;

/// Outcome of probing for the required external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReport {
    /// True iff no tool is missing.
    pub available: bool,
    /// Missing tools, in the order they were checked.
    pub missing: Vec<String>,
}

impl CapabilityReport {
    pub fn from_missing(missing: Vec<String>) -> Self {
        Self {
            available: missing.is_empty(),
            missing,
        }
    }
}

/// The ports found by one discovery call, or the reason none could be listed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscoveryReport {
    pub ports: Vec<PortRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiscoveryReport {
    pub fn success(ports: Vec<PortRecord>) -> Self {
        Self { ports, error: None }
    }

    pub fn failure(error: &DiscoveryError) -> Self {
        Self {
            ports: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Records bucketed by [`PortGroup`] in display order, skipping empty groups.
    pub fn grouped(&self) -> Vec<(PortGroup, Vec<&PortRecord>)> {
        PortGroup::ALL
            .into_iter()
            .map(|group| {
                let members = self
                    .ports
                    .iter()
                    .filter(|record| record.group() == Some(group))
                    .collect::<Vec<_>>();
                (group, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }
}

impl From<Result<Vec<PortRecord>, DiscoveryError>> for DiscoveryReport {
    fn from(result: Result<Vec<PortRecord>, DiscoveryError>) -> Self {
        match result {
            Ok(ports) => Self::success(ports),
            Err(e) => Self::failure(&e),
        }
    }
}
