//! add-alias / remove-alias command implementations

use anyhow::Result;

use docketter::registry::Registry;

/// Register an alias for a stored name.
pub fn add_alias_command(registry: &mut Registry, name: &str, alias: &str) -> Result<()> {
    registry.add_alias(name, alias)?;
    println!("Added alias {alias} -> {name}");

    Ok(())
}

/// Remove an alias, leaving the underlying docker in place.
pub fn remove_alias_command(registry: &mut Registry, alias: &str) -> Result<()> {
    if registry.remove_alias(alias)? {
        println!("Removed alias {alias}");
    } else {
        println!("No such alias: {alias}");
    }

    Ok(())
}
