//! The fixed set of ports the discovery pipeline reports on.

use std::ops::RangeInclusive;

/// Ports of interest: 3000-3999, 5000-5999, 8080 and 80.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetPorts;

impl TargetPorts {
    pub const RANGES: [RangeInclusive<u16>; 4] = [3000..=3999, 5000..=5999, 8080..=8080, 80..=80];

    /// Extended regex handed to `grep -E` to pre-filter socket listings.
    pub const GREP_PATTERN: &'static str = ":(3[0-9]{3}|5[0-9]{3}|8080|80)[[:space:]]";

    pub fn contains(port: u16) -> bool {
        Self::RANGES.iter().any(|range| range.contains(&port))
    }
}
