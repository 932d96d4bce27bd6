//! # Team Registry
//!
//! The set of known teams. A team is known once its record set exists in the store;
//! the registry caches those names and is hydrated from the store at startup.

use anyhow::Result;
use std::collections::BTreeSet;

use crate::domain::traits::RecordStore;

#[derive(Debug, Default, Clone)]
pub struct TeamRegistry {
    known: BTreeSet<String>,
}

impl TeamRegistry {
    /// Loads every team that already has a record set.
    pub async fn hydrate(store: &dyn RecordStore) -> Result<Self> {
        let known = store.teams().await?.into_iter().collect();
        Ok(Self { known })
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Known in memory, or present in the store (e.g. created by another process).
    pub async fn is_known(&mut self, store: &dyn RecordStore, team: &str) -> Result<bool> {
        if self.known.contains(team) {
            return Ok(true);
        }
        if store.exists(team).await? {
            self.known.insert(team.to_string());
            return Ok(true);
        }
        Ok(false)
    }

    /// Creates the team's record set if absent and remembers it.
    pub async fn register(&mut self, store: &dyn RecordStore, team: &str) -> Result<()> {
        store.touch(team).await?;
        if self.known.insert(team.to_string()) {
            tracing::info!("Registered team '{}'", team);
        }
        Ok(())
    }

    /// Every team searched globally, sorted. Includes teams created on disk since startup.
    pub async fn all(&mut self, store: &dyn RecordStore) -> Result<Vec<String>> {
        self.known.extend(store.teams().await?);
        Ok(self.known.iter().cloned().collect())
    }
}
