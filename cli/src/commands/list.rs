//! List command - show listening ports grouped by range.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Local;
use devports_core::{DiscoveryReport, PortRecord};

use super::truncate;

pub async fn run(
    config_path: Option<PathBuf>,
    port_filter: Option<u16>,
    name_filter: Option<String>,
    json: bool,
) -> Result<()> {
    let service = super::service(config_path).await?;
    let mut report = service.discover_ports().await;

    // Apply filters
    apply_filters(&mut report, port_filter, name_filter.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(error) = &report.error {
        bail!("{}", error);
    }

    if json {
        return Ok(());
    }

    println!("Scanned at {}\n", Local::now().format("%Y-%m-%d %H:%M:%S"));

    if report.ports.is_empty() {
        println!("No ports found in the specified ranges.");
        return Ok(());
    }

    for (group, records) in report.grouped() {
        println!("{}", group.title());
        print_table(&records);
        println!();
    }

    println!("Total: {} ports", report.ports.len());
    Ok(())
}

fn apply_filters(report: &mut DiscoveryReport, port: Option<u16>, name: Option<&str>) {
    if let Some(p) = port {
        report.ports.retain(|record| record.port == p);
    }
    if let Some(query) = name {
        report.ports.retain(|record| record.matches_search(query));
    }
}

fn print_table(records: &[&PortRecord]) {
    println!(
        "  {:<6} {:<6} {:<10} {:<20} {:<20} DESCRIPTION",
        "PORT", "PROTO", "PID", "PROCESS", "SERVICE"
    );
    println!("  {}", "-".repeat(96));

    for record in records {
        let service = record.group().map(|g| g.service_kind()).unwrap_or("-");
        println!(
            "  {:<6} {:<6} {:<10} {:<20} {:<20} {}",
            record.port,
            record.protocol,
            truncate(&record.pid, 10),
            truncate(&record.process_name, 20),
            service,
            record.description
        );
    }
}
