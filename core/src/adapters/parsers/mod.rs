//! Parsers for the text output of external tools.

pub mod lsof;
pub mod ss;

pub use lsof::parse_process_line;
pub use ss::{extract_port, parse_listener, parse_listeners, PortMatch};
