use anyhow::Result;
use clap::{Parser, Subcommand};

use docketter::registry::Registry;

mod cli;

#[derive(Parser)]
#[command(name = "docketter")]
#[command(about = "Manage multiple docker-compose files by name and alias")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the docker-compose file stored under a name or alias
    Run {
        /// Name or alias of the stored compose file
        label: String,
    },

    /// Stop the docker-compose file stored under a name or alias
    Stop {
        /// Name or alias of the stored compose file
        label: String,
    },

    /// Store a docker-compose file under a name, optionally with an alias
    AddDocker {
        /// Name to store the compose file under
        name: String,
        /// Path to the compose file
        path: String,
        /// Optional alias for the name
        alias: Option<String>,
    },

    /// Add an alias for a stored name
    AddAlias {
        /// Name the alias should point at
        name: String,
        /// The alias to register
        alias: String,
    },

    /// Remove a stored compose file by name or alias
    RemoveDocker {
        /// Name or alias of the stored compose file
        label: String,
    },

    /// Remove an alias, leaving the underlying entry in place
    RemoveAlias {
        /// The alias to remove
        alias: String,
    },

    /// List all stored names and their compose file paths
    InfoDockers,

    /// List all aliases and the compose files they resolve to
    InfoAliases,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut registry = Registry::open()?;

    match cli.command {
        Commands::Run { label } => {
            cli::compose::run_command(&mut registry, &label)?;
        }
        Commands::Stop { label } => {
            cli::compose::stop_command(&mut registry, &label)?;
        }
        Commands::AddDocker { name, path, alias } => {
            cli::docker::add_docker_command(&mut registry, &name, &path, alias.as_deref())?;
        }
        Commands::AddAlias { name, alias } => {
            cli::alias::add_alias_command(&mut registry, &name, &alias)?;
        }
        Commands::RemoveDocker { label } => {
            cli::docker::remove_docker_command(&mut registry, &label)?;
        }
        Commands::RemoveAlias { alias } => {
            cli::alias::remove_alias_command(&mut registry, &alias)?;
        }
        Commands::InfoDockers => {
            cli::info::info_dockers_command(&registry)?;
        }
        Commands::InfoAliases => {
            cli::info::info_aliases_command(&mut registry)?;
        }
    }

    Ok(())
}
