//! run / stop command implementations

use anyhow::Result;

use docketter::compose::ProcessRunner;
use docketter::registry::Registry;

/// Start the compose file behind a name or alias.
pub fn run_command(registry: &mut Registry, label: &str) -> Result<()> {
    registry.run(label, &mut ProcessRunner)
}

/// Stop the compose file behind a name or alias.
pub fn stop_command(registry: &mut Registry, label: &str) -> Result<()> {
    registry.stop(label, &mut ProcessRunner)
}
