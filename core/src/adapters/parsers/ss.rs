//! Listener line parsing for socket-listing output.
//!
//! Different `ss`/`netstat` builds print the local `host:port` token in
//! different shapes, so port extraction is a two-stage match:
//!
//! 1. [`PortMatch::Spaced`]: a colon, digits, then whitespace
//!    (`0.0.0.0:3000   0.0.0.0:*`).
//! 2. [`PortMatch::Trailing`]: a non-colon character, a colon, then digits
//!    at the end of the line (`*:80`).
//!
//! A line matching neither is skipped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::{Listener, Protocol, TargetPorts};

static SPACED_PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([0-9]+)\s").expect("spaced port pattern is valid"));

static TRAILING_PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^:]:([0-9]+)$").expect("trailing port pattern is valid"));

/// Which extraction stage produced a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortMatch {
    Spaced,
    Trailing,
}

/// Extract the raw port digits from a listener line.
///
/// The first stage wins whenever it matches, even if its digits later
/// turn out not to be a usable port.
pub fn extract_port(line: &str) -> Option<(&str, PortMatch)> {
    if let Some(caps) = SPACED_PORT.captures(line) {
        return caps.get(1).map(|m| (m.as_str(), PortMatch::Spaced));
    }
    TRAILING_PORT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| (m.as_str(), PortMatch::Trailing))
}

/// Parse one listener line into a target-port [`Listener`].
///
/// Returns `None` for lines without a port token and for ports outside
/// [`TargetPorts`].
pub fn parse_listener(line: &str) -> Option<Listener> {
    let Some((digits, stage)) = extract_port(line) else {
        trace!(line = line, "No port token, skipping line");
        return None;
    };

    let port: u16 = match digits.parse() {
        Ok(p) => p,
        Err(_) => {
            trace!(line = line, digits = digits, "Port out of range, skipping line");
            return None;
        }
    };

    if !TargetPorts::contains(port) {
        trace!(port = port, "Port outside target ranges, skipping line");
        return None;
    }

    trace!(port = port, stage = ?stage, "Parsed listener");
    Some(Listener {
        port,
        protocol: Protocol::infer(line),
    })
}

/// Parse every line of socket-listing output, in order.
pub fn parse_listeners<'a, I>(lines: I) -> Vec<Listener>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(parse_listener).collect()
}
