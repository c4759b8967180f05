//! Process line parsing for `lsof -i :<port>` output.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ProcessIdentity;

/// A token, a numeric PID, then a second token.
static PROCESS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+\s+([0-9]+)\s+(\S+)").expect("process line pattern is valid"));

/// Parse the last line of lookup output into a process identity.
///
/// The header row, when present, sits above the last line and never
/// matches because its PID column is not numeric. The token after the
/// PID is taken as the process name.
pub fn parse_process_line(output: &str) -> Option<ProcessIdentity> {
    let line = output.trim_end().lines().last()?.trim();
    if line.is_empty() {
        return None;
    }

    let caps = PROCESS_LINE.captures(line)?;
    Some(ProcessIdentity::new(&caps[2], &caps[1]))
}
