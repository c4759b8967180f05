//! Port discovery application service.

use std::sync::LazyLock;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::adapters::parsers::{parse_listeners, parse_process_line};
use crate::adapters::SystemCommandRunner;
use crate::config::DiscoveryConfig;
use crate::domain::{
    CapabilityReport, DiscoveryReport, Listener, PortDescriptionTable, PortRecord,
    ProcessIdentity, TargetPorts,
};
use crate::error::{DiscoveryError, Error, Result};
use crate::ports::CommandRunner;

/// Tools that must be on the search path: socket listing, process lookup,
/// and text filtering, in check order.
pub const REQUIRED_TOOLS: [&str; 3] = ["ss", "lsof", "grep"];

/// Shell pipeline that lists listeners already filtered to the target ports.
pub static LISTENER_FILTER_COMMAND: LazyLock<String> =
    LazyLock::new(|| format!("ss -tuln | grep -E '{}'", TargetPorts::GREP_PATTERN));

/// Finds listening sockets on target ports and annotates them.
///
/// All external tools are reached through the injected [`CommandRunner`].
/// Nothing is cached between calls.
pub struct PortDiscoveryService<R: CommandRunner> {
    runner: R,
    config: DiscoveryConfig,
    descriptions: PortDescriptionTable,
}

impl PortDiscoveryService<SystemCommandRunner> {
    /// Create a service that runs tools on this host.
    pub fn system(config: DiscoveryConfig) -> Self {
        let runner = SystemCommandRunner::with_timeout(config.command_timeout());
        Self::with_config(runner, config)
    }
}

impl<R: CommandRunner> PortDiscoveryService<R> {
    /// Create a service with the given runner and default configuration.
    pub fn new(runner: R) -> Self {
        Self::with_config(runner, DiscoveryConfig::default())
    }

    pub fn with_config(runner: R, config: DiscoveryConfig) -> Self {
        Self {
            runner,
            config,
            descriptions: PortDescriptionTable::STANDARD,
        }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Probe the search path for every tool in [`REQUIRED_TOOLS`].
    ///
    /// A missing tool is a normal outcome and is reported, not raised.
    pub async fn check_requirements(&self) -> CapabilityReport {
        let mut missing = Vec::new();

        for tool in REQUIRED_TOOLS {
            if let Err(e) = self.runner.run("which", &[tool]).await {
                debug!(tool = tool, error = %e, "Required tool not found");
                missing.push(tool.to_string());
            }
        }

        CapabilityReport::from_missing(missing)
    }

    /// List raw listener lines for the target ports.
    ///
    /// Tries the grep-filtered listing first and falls back to the full
    /// listing if that fails for any reason (grep also fails when nothing
    /// matches). Empty output is an empty list, not an error.
    pub async fn list_listening_sockets(&self) -> Result<Vec<String>> {
        let stdout = match self
            .runner
            .run("sh", &["-c", LISTENER_FILTER_COMMAND.as_str()])
            .await
        {
            Ok(stdout) => stdout,
            Err(e) => {
                debug!(error = %e, "Filtered listing failed, falling back to full listing");
                self.runner.run("ss", &["-tuln"]).await?
            }
        };

        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        Ok(trimmed.lines().map(str::to_string).collect())
    }

    /// Look up the process bound to `port`.
    pub async fn lookup_process(&self, port: u16) -> Result<ProcessIdentity> {
        let target = format!(":{}", port);
        let stdout = self.runner.run("lsof", &["-i", &target]).await?;

        parse_process_line(&stdout)
            .ok_or_else(|| Error::ParseError(format!("No process line in lsof output for port {}", port)))
    }

    /// Look up the process bound to `port`, falling back to
    /// [`ProcessIdentity::unknown`] on any failure.
    pub async fn resolve_process(&self, port: u16) -> ProcessIdentity {
        match self.lookup_process(port).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!(port = port, error = %e, "Could not get process info for port");
                ProcessIdentity::unknown()
            }
        }
    }

    /// Description for `port` from the well-known port table.
    pub fn describe(&self, port: u16) -> &'static str {
        self.descriptions.describe(port)
    }

    /// Run the whole pipeline, returning the terminal error if there is one.
    pub async fn try_discover(&self) -> std::result::Result<Vec<PortRecord>, DiscoveryError> {
        let capabilities = self.check_requirements().await;
        if !capabilities.available {
            return Err(DiscoveryError::EnvironmentUnavailable {
                missing: capabilities.missing,
            });
        }

        let lines = self
            .list_listening_sockets()
            .await
            .map_err(DiscoveryError::EnumerationFailure)?;

        let listeners = parse_listeners(lines.iter().map(String::as_str));
        debug!(
            lines = lines.len(),
            listeners = listeners.len(),
            "Parsed listener output"
        );

        let records = stream::iter(listeners)
            .map(|listener| self.build_record(listener))
            .buffered(self.config.lookup_concurrency())
            .collect::<Vec<_>>()
            .await;

        info!(ports = records.len(), "Port discovery finished");
        Ok(records)
    }

    /// Run the whole pipeline and fold any terminal error into the report.
    pub async fn discover_ports(&self) -> DiscoveryReport {
        let result = self.try_discover().await;
        if let Err(e) = &result {
            warn!(error = %e, "Port discovery failed");
        }
        DiscoveryReport::from(result)
    }

    async fn build_record(&self, listener: Listener) -> PortRecord {
        let identity = self.resolve_process(listener.port).await;
        PortRecord::new(listener, identity, self.describe(listener.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Protocol;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted runner keyed by the full command line.
    struct MockRunner {
        responses: HashMap<String, std::result::Result<String, String>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockRunner {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// All required tools present.
        fn with_tools() -> Self {
            let mut runner = Self::new();
            for tool in REQUIRED_TOOLS {
                runner = runner.ok(&format!("which {}", tool), &format!("/usr/bin/{}\n", tool));
            }
            runner
        }

        fn ok(mut self, command: &str, stdout: &str) -> Self {
            self.responses
                .insert(command.to_string(), Ok(stdout.to_string()));
            self
        }

        fn fail(mut self, command: &str, message: &str) -> Self {
            self.responses
                .insert(command.to_string(), Err(message.to_string()));
            self
        }

        fn filtered(self, stdout: &str) -> Self {
            let command = format!("sh -c {}", LISTENER_FILTER_COMMAND.as_str());
            self.ok(&command, stdout)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for MockRunner {
        async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
            let mut command = program.to_string();
            for arg in args {
                command.push(' ');
                command.push_str(arg);
            }
            self.calls.lock().unwrap().push(command.clone());

            match self.responses.get(&command) {
                Some(Ok(stdout)) => Ok(stdout.clone()),
                Some(Err(message)) => Err(Error::CommandFailed(message.clone())),
                None => Err(Error::CommandFailed(format!("{} not scripted", command))),
            }
        }
    }

    const LSOF_NODE: &str = "COMMAND   PID USER   FD   TYPE DEVICE SIZE/OFF NODE NAME\n\
                             node    4242 alice  23u  IPv4  12345      0t0  TCP *:3000 (LISTEN)\n";

    #[tokio::test]
    async fn test_check_requirements_all_present() {
        let service = PortDiscoveryService::new(MockRunner::with_tools());
        let report = service.check_requirements().await;
        assert!(report.available);
        assert!(report.missing.is_empty());
    }

    #[tokio::test]
    async fn test_check_requirements_keeps_order() {
        let runner = MockRunner::new().ok("which lsof", "/usr/bin/lsof\n");
        let service = PortDiscoveryService::new(runner);
        let report = service.check_requirements().await;
        assert!(!report.available);
        assert_eq!(report.missing, vec!["ss", "grep"]);
    }

    #[tokio::test]
    async fn test_missing_tool_is_terminal_error() {
        let runner = MockRunner::new()
            .ok("which ss", "/usr/bin/ss\n")
            .ok("which grep", "/usr/bin/grep\n");
        let service = PortDiscoveryService::new(runner);

        let report = service.discover_ports().await;
        assert!(report.ports.is_empty());
        let error = report.error.unwrap();
        assert!(error.contains("lsof"), "{error}");
        assert!(!error.contains("grep"), "{error}");

        // No listing is attempted once a tool is missing.
        assert!(!service
            .runner
            .calls()
            .iter()
            .any(|c| c.starts_with("sh ") || c.starts_with("ss ")));
    }

    #[tokio::test]
    async fn test_discovers_and_annotates_ports() {
        let runner = MockRunner::with_tools()
            .filtered(
                "tcp   LISTEN 0      511    0.0.0.0:3000      0.0.0.0:*\n\
                 tcp   LISTEN 0      128    *:80\n",
            )
            .ok("lsof -i :3000", LSOF_NODE)
            .ok("lsof -i :80", "COMMAND PID USER\nnginx 77 root\n");
        let service = PortDiscoveryService::new(runner);

        let report = service.discover_ports().await;
        assert!(report.is_ok());
        assert_eq!(report.ports.len(), 2);

        let first = &report.ports[0];
        assert_eq!(first.port, 3000);
        assert_eq!(first.protocol, Protocol::Tcp);
        assert_eq!(first.pid, "4242");
        assert_eq!(first.process_name, "alice");
        assert_eq!(
            first.description,
            "Common development server port (React, Node.js)"
        );

        let second = &report.ports[1];
        assert_eq!(second.port, 80);
        assert_eq!(second.protocol, Protocol::Tcp);
        assert_eq!(second.description, "HTTP - Standard web server port");
        assert_eq!(second.pid, "77");
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_record() {
        let runner = MockRunner::with_tools()
            .filtered(
                "tcp LISTEN 0 128 0.0.0.0:3000 0.0.0.0:*\n\
                 tcp LISTEN 0 128 0.0.0.0:5432 0.0.0.0:*\n\
                 tcp LISTEN 0 128 0.0.0.0:8080 0.0.0.0:*\n",
            )
            .ok("lsof -i :3000", LSOF_NODE)
            .fail("lsof -i :5432", "permission denied")
            .ok("lsof -i :8080", "garbage without a pid\n");
        let service = PortDiscoveryService::new(runner);

        let report = service.discover_ports().await;
        assert!(report.is_ok());
        assert_eq!(report.ports.len(), 3);

        assert_eq!(report.ports[0].pid, "4242");

        let postgres = &report.ports[1];
        assert_eq!(postgres.port, 5432);
        assert_eq!(postgres.process_name, "Unknown");
        assert_eq!(postgres.pid, "Unknown");
        assert_eq!(postgres.description, "PostgreSQL database server");

        let alt_http = &report.ports[2];
        assert_eq!(alt_http.process_name, "Unknown");
        assert_eq!(alt_http.pid, "Unknown");
    }

    #[tokio::test]
    async fn test_empty_listing_is_not_an_error() {
        let runner = MockRunner::with_tools().filtered("  \n\t\n");
        let service = PortDiscoveryService::new(runner);

        let report = service.discover_ports().await;
        assert!(report.ports.is_empty());
        assert_eq!(report.error, None);
    }

    #[tokio::test]
    async fn test_falls_back_to_full_listing() {
        let runner = MockRunner::with_tools()
            .ok(
                "ss -tuln",
                "Netid State  Recv-Q Send-Q Local Address:Port Peer Address:Port\n\
                 tcp   LISTEN 0      128    0.0.0.0:22         0.0.0.0:*\n\
                 tcp   LISTEN 0      128    0.0.0.0:5000       0.0.0.0:*\n\
                 udp   UNCONN 0      0      0.0.0.0:631        0.0.0.0:*\n",
            )
            .ok("lsof -i :5000", "COMMAND PID USER\npython3 900 bob\n");
        let service = PortDiscoveryService::new(runner);

        let report = service.discover_ports().await;
        assert!(report.is_ok());
        assert_eq!(report.ports.len(), 1);
        assert_eq!(report.ports[0].port, 5000);
        assert_eq!(report.ports[0].description, "Flask/Python development server");

        let calls = service.runner.calls();
        assert_eq!(calls.iter().filter(|c| c.as_str() == "ss -tuln").count(), 1);
    }

    #[tokio::test]
    async fn test_enumeration_failure_is_terminal_error() {
        let runner = MockRunner::with_tools().fail("ss -tuln", "Cannot open netlink socket");
        let service = PortDiscoveryService::new(runner);

        let report = service.discover_ports().await;
        assert!(report.ports.is_empty());
        let error = report.error.unwrap();
        assert!(error.starts_with("Error scanning ports: "), "{error}");
        assert!(error.contains("Cannot open netlink socket"), "{error}");
    }

    #[tokio::test]
    async fn test_same_port_tcp_and_udp_yield_two_records() {
        let runner = MockRunner::with_tools()
            .filtered(
                "tcp LISTEN 0 128 0.0.0.0:3000 0.0.0.0:*\n\
                 udp UNCONN 0 0   0.0.0.0:3000 0.0.0.0:*\n",
            )
            .ok("lsof -i :3000", LSOF_NODE);
        let service = PortDiscoveryService::new(runner);

        let report = service.discover_ports().await;
        assert_eq!(report.ports.len(), 2);
        assert_eq!(report.ports[0].port, 3000);
        assert_eq!(report.ports[0].protocol, Protocol::Tcp);
        assert_eq!(report.ports[1].port, 3000);
        assert_eq!(report.ports[1].protocol, Protocol::Udp);
    }

    #[tokio::test]
    async fn test_sequential_lookups_preserve_order() {
        let runner = MockRunner::with_tools()
            .filtered(
                "tcp LISTEN 0 128 0.0.0.0:3001 0.0.0.0:*\n\
                 tcp LISTEN 0 128 0.0.0.0:3000 0.0.0.0:*\n",
            )
            .ok("lsof -i :3000", LSOF_NODE);
        let config = DiscoveryConfig {
            command_timeout_secs: 1,
            max_concurrent_lookups: 1,
        };
        let service = PortDiscoveryService::with_config(runner, config);

        let report = service.discover_ports().await;
        let ports: Vec<u16> = report.ports.iter().map(|p| p.port).collect();
        assert_eq!(ports, vec![3001, 3000]);
        assert_eq!(
            report.ports[0].description,
            "Alternative development server port"
        );
    }

    #[test]
    fn test_describe_uses_table() {
        let service = PortDiscoveryService::new(MockRunner::new());
        assert_eq!(service.describe(5432), "PostgreSQL database server");
        assert_eq!(service.describe(9999), "Custom application");
    }
}
