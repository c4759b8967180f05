//! Example: Discover and display listening development ports.

use devports_core::discover_ports;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("Scanning ports...\n");

    let report = discover_ports().await;

    if let Some(error) = &report.error {
        eprintln!("{}", error);
        return;
    }

    if report.ports.is_empty() {
        println!("No ports found in the specified ranges.");
        return;
    }

    println!(
        "{:<6} {:<6} {:<10} {:<20} {}",
        "PORT", "PROTO", "PID", "PROCESS", "DESCRIPTION"
    );
    println!("{}", "-".repeat(100));

    for port in &report.ports {
        println!(
            "{:<6} {:<6} {:<10} {:<20.20} {}",
            port.port, port.protocol, port.pid, port.process_name, port.description
        );
    }

    println!("\nTotal: {} ports", report.ports.len());
}
