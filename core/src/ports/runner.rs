//! Command execution port (interface).

use crate::error::Result;

/// Port for running external programs.
///
/// Every tool the discovery pipeline needs (`which`, `ss`, `grep`, `lsof`)
/// is reached through this trait, so tests can script tool output.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and return its standard output.
    ///
    /// Fails if the program cannot be spawned, exits unsuccessfully,
    /// writes invalid UTF-8, or exceeds the runner's time bound.
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
