//! Docketter - manage multiple docker-compose files
//!
//! Docketter keeps a small registry of docker-compose files under
//! human-friendly names, with optional aliases on top, and dispatches
//! start/stop invocations to the `docker-compose` binary. The registry
//! lives in `~/.config/docketter/configurations.json` and is reloaded on
//! every invocation.
//!
//! A label passed to any operation may be either a name or an alias;
//! aliases that point at a removed name are cleaned up lazily the first
//! time a lookup hits them.

pub mod compose;
pub mod config;
pub mod registry;
