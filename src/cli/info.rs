//! info-dockers / info-aliases command implementations

use anyhow::Result;

use docketter::registry::Registry;

/// Print every stored name and the compose file it points at.
pub fn info_dockers_command(registry: &Registry) -> Result<()> {
    let dockers = registry.list_dockers();

    if dockers.is_empty() {
        println!("No dockers stored.");
        return Ok(());
    }

    println!("Dockers ({}):\n", dockers.len());
    for (name, path) in dockers {
        println!("  {name} -> {path}");
    }

    Ok(())
}

/// Print every alias and the compose file it resolves to.
///
/// Aliases that no longer resolve are dropped from storage as a side
/// effect of the listing.
pub fn info_aliases_command(registry: &mut Registry) -> Result<()> {
    let aliases = registry.list_aliases()?;

    if aliases.is_empty() {
        println!("No aliases stored.");
        return Ok(());
    }

    println!("Aliases ({}):\n", aliases.len());
    for (alias, path) in aliases {
        println!("  {alias} -> {path}");
    }

    Ok(())
}
