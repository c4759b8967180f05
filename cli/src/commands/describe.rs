//! Describe command - look up a port in the well-known port table.

use anyhow::Result;
use devports_core::{describe, PortGroup, TargetPorts};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Description {
    port: u16,
    description: &'static str,
    group: Option<PortGroup>,
    monitored: bool,
}

pub fn run(port: u16, json: bool) -> Result<()> {
    let description = Description {
        port,
        description: describe(port),
        group: PortGroup::of(port),
        monitored: TargetPorts::contains(port),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&description)?);
        return Ok(());
    }

    println!("{}: {}", description.port, description.description);
    match description.group {
        Some(group) => println!("Group: {}", group.title()),
        None => println!("Not in a monitored range"),
    }
    Ok(())
}
