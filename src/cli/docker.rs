//! add-docker / remove-docker command implementations

use anyhow::Result;

use docketter::registry::Registry;

/// Store a compose file under a name, optionally with an alias.
pub fn add_docker_command(
    registry: &mut Registry,
    name: &str,
    path: &str,
    alias: Option<&str>,
) -> Result<()> {
    registry.add_docker(name, path, alias)?;

    match alias.filter(|a| !a.is_empty()) {
        Some(alias) => println!("Added {name} -> {path} (alias {alias})"),
        None => println!("Added {name} -> {path}"),
    }

    Ok(())
}

/// Remove a stored compose file by name or alias.
pub fn remove_docker_command(registry: &mut Registry, label: &str) -> Result<()> {
    registry.remove_docker(label)?;
    println!("Removed {label}");

    Ok(())
}
