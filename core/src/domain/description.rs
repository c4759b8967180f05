//! Well-known port descriptions.

/// Label used for ports absent from the table.
pub const DEFAULT_DESCRIPTION: &str = "Custom application";

const WELL_KNOWN: &[(u16, &str)] = &[
    (80, "HTTP - Standard web server port"),
    (3000, "Common development server port (React, Node.js)"),
    (3001, "Alternative development server port"),
    (3306, "MySQL database server"),
    (3307, "Alternative MySQL port"),
    (5000, "Flask/Python development server"),
    (5432, "PostgreSQL database server"),
    (8080, "Alternative HTTP port, often used for development servers"),
];

/// Read-only mapping from well-known port numbers to short labels.
///
/// Used only to annotate records, never to filter them.
#[derive(Debug, Clone, Copy)]
pub struct PortDescriptionTable {
    entries: &'static [(u16, &'static str)],
}

impl PortDescriptionTable {
    /// The built-in table.
    pub const STANDARD: PortDescriptionTable = PortDescriptionTable {
        entries: WELL_KNOWN,
    };

    /// Label for `port`, if the table has one.
    pub fn get(&self, port: u16) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == port)
            .map(|(_, label)| *label)
    }

    /// Label for `port`, falling back to [`DEFAULT_DESCRIPTION`].
    pub fn describe(&self, port: u16) -> &'static str {
        self.get(port).unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PortDescriptionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Describe a port using the built-in table.
pub fn describe(port: u16) -> &'static str {
    PortDescriptionTable::STANDARD.describe(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_ports() {
        assert_eq!(describe(5432), "PostgreSQL database server");
        assert_eq!(describe(80), "HTTP - Standard web server port");
        assert_eq!(
            describe(8080),
            "Alternative HTTP port, often used for development servers"
        );
    }

    #[test]
    fn test_describe_falls_back() {
        assert_eq!(describe(9999), "Custom application");
        assert_eq!(describe(3999), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_table_has_no_duplicate_ports() {
        let table = PortDescriptionTable::STANDARD;
        let mut ports: Vec<u16> = table.iter().map(|(p, _)| p).collect();
        ports.sort_unstable();
        ports.dedup();
        assert_eq!(ports.len(), table.len());
    }
}
