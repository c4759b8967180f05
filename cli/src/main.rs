//! devports CLI - List listening development ports
//!
//! A command-line front end for the port discovery service: lists
//! listeners on ports 80, 8080, 3000-3999 and 5000-5999 with their owning
//! processes.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "devports")]
#[command(author, version, about = "List listening development ports")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Path to a config file (default: ~/.devports/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List listening ports in the target ranges
    #[command(alias = "ls")]
    List {
        /// Filter by port number
        #[arg(short, long)]
        port: Option<u16>,

        /// Filter by process name, PID, protocol or description
        #[arg(short = 'n', long)]
        name: Option<String>,
    },

    /// Check that the required system tools are installed
    Check,

    /// Show the description for a port
    Describe {
        /// Port number to describe
        port: u16,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::List { port, name }) => {
            commands::list::run(cli.config, port, name, cli.json).await?;
        }
        Some(Commands::Check) => {
            commands::check::run(cli.config, cli.json).await?;
        }
        Some(Commands::Describe { port }) => {
            commands::describe::run(port, cli.json)?;
        }
        None => {
            commands::list::run(cli.config, None, None, cli.json).await?;
        }
    }

    Ok(())
}
