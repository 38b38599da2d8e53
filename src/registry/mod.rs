//! Label resolution and registry operations
//!
//! A label is whatever string the user typed: either a name from the
//! `dockers` collection or an alias pointing at one. Every operation goes
//! through the same resolution chokepoint, which also self-heals dangling
//! aliases the moment a lookup trips over them.

use anyhow::Result;
use tracing::warn;

use crate::compose::{self, ComposeRunner};
use crate::config::{ConfigStore, Configurations, StoreError};

/// In-memory registry bound to a persisted [`ConfigStore`].
///
/// Constructed once per invocation; mutations are applied in memory and
/// written back immediately, so a later store failure loses at most the
/// current operation.
#[derive(Debug)]
pub struct Registry {
    store: ConfigStore,
    configurations: Configurations,
}

impl Registry {
    /// Open the registry at the default configurations location.
    pub fn open() -> Result<Self, StoreError> {
        Self::with_store(ConfigStore::open()?)
    }

    /// Open the registry over an explicit store.
    pub fn with_store(store: ConfigStore) -> Result<Self, StoreError> {
        let configurations = store.load()?;
        Ok(Self {
            store,
            configurations,
        })
    }

    pub fn configurations(&self) -> &Configurations {
        &self.configurations
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.configurations)
    }

    /// Store a compose file path under `name`, optionally registering an
    /// alias for it in the same step.
    ///
    /// Existing entries under the same keys are overwritten silently;
    /// last write wins.
    pub fn add_docker(
        &mut self,
        name: &str,
        path: &str,
        alias: Option<&str>,
    ) -> Result<(), StoreError> {
        self.configurations
            .dockers
            .insert(name.to_string(), path.to_string());

        if let Some(alias) = alias.filter(|a| !a.is_empty()) {
            self.configurations
                .alias
                .insert(alias.to_string(), name.to_string());
        }

        self.persist()
    }

    /// Register `alias` as a shortcut for `name`.
    ///
    /// The name is not required to exist yet; an alias may be declared
    /// ahead of its docker.
    pub fn add_alias(&mut self, name: &str, alias: &str) -> Result<(), StoreError> {
        self.configurations
            .alias
            .insert(alias.to_string(), name.to_string());

        self.persist()
    }

    /// Collapse a label to a name: alias indirection when the label is a
    /// registered alias, otherwise the label already is the name.
    pub fn resolve_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.configurations
            .alias
            .get(label)
            .map(String::as_str)
            .unwrap_or(label)
    }

    /// Remove an alias, reporting whether one was actually removed.
    /// Persists only on actual deletion.
    pub fn remove_alias(&mut self, alias: &str) -> Result<bool, StoreError> {
        if self.configurations.alias.remove(alias).is_some() {
            self.persist()?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Remove a compose entry by name or alias.
    ///
    /// Only the alias the caller used is dropped with it. Other aliases
    /// pointing at the same name go dangling and are cleaned up lazily on
    /// their next resolution.
    pub fn remove_docker(&mut self, label: &str) -> Result<(), StoreError> {
        let name = self.resolve_name(label).to_string();
        self.remove_alias(label)?;

        if self.configurations.dockers.remove(&name).is_some() {
            self.persist()?;
        }

        Ok(())
    }

    /// Resolve a label to its stored compose file path.
    ///
    /// An unknown label is a normal outcome, not an error: it logs one
    /// diagnostic and, when the label was a dangling alias, removes the
    /// alias so the next lookup does not trip over it again. Only store
    /// failures propagate.
    pub fn resolve_reference(&mut self, label: &str) -> Result<Option<String>, StoreError> {
        let name = self.resolve_name(label).to_string();

        if let Some(path) = self.configurations.dockers.get(&name).cloned() {
            return Ok(Some(path));
        }

        warn!("Missing label {label}");
        self.remove_alias(label)?;

        Ok(None)
    }

    /// All stored (name, path) pairs, sorted by name for stable output.
    pub fn list_dockers(&self) -> Vec<(String, String)> {
        let mut dockers: Vec<_> = self
            .configurations
            .dockers
            .iter()
            .map(|(name, path)| (name.clone(), path.clone()))
            .collect();

        dockers.sort();
        dockers
    }

    /// All (alias, resolved path) pairs, sorted by alias.
    ///
    /// Aliases that no longer resolve are excluded, and resolving them
    /// here removes them from storage as a side effect.
    pub fn list_aliases(&mut self) -> Result<Vec<(String, String)>, StoreError> {
        let mut aliases = Vec::new();

        let keys: Vec<String> = self.configurations.alias.keys().cloned().collect();
        for alias in keys {
            if let Some(path) = self.resolve_reference(&alias)? {
                aliases.push((alias, path));
            }
        }

        aliases.sort();
        Ok(aliases)
    }

    /// Start the compose file behind `label` in detached mode.
    ///
    /// An unresolved label is a no-op; the diagnostic was already logged
    /// during resolution.
    pub fn run(&mut self, label: &str, runner: &mut impl ComposeRunner) -> Result<()> {
        if let Some(path) = self.resolve_reference(label)? {
            runner.execute(&compose::up_command(&path))?;
        }

        Ok(())
    }

    /// Stop the compose file behind `label`. Unresolved labels are a no-op.
    pub fn stop(&mut self, label: &str, runner: &mut impl ComposeRunner) -> Result<()> {
        if let Some(path) = self.resolve_reference(label)? {
            runner.execute(&compose::stop_command(&path))?;
        }

        Ok(())
    }
}
