//! Check command - report which required tools are installed.

use std::path::PathBuf;

use anyhow::{bail, Result};
use devports_core::application::REQUIRED_TOOLS;

pub async fn run(config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let service = super::service(config_path).await?;
    let report = service.check_requirements().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for tool in REQUIRED_TOOLS {
            let status = if report.missing.iter().any(|m| m == tool) {
                "missing"
            } else {
                "ok"
            };
            println!("{:<6} {}", tool, status);
        }
    }

    if !report.available {
        bail!("Missing required system commands: {}", report.missing.join(", "));
    }
    Ok(())
}
