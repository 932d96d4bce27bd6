//! # In-Memory Record Store
//!
//! `RecordStore` kept entirely in process memory. Selected with `storage.backend: memory`
//! and used by the conversation tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::errors::StoreError;
use crate::domain::paths::validate_team_name;
use crate::domain::traits::RecordStore;

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    teams: Mutex<BTreeMap<String, Vec<String>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_teams<T>(&self, f: impl FnOnce(&mut BTreeMap<String, Vec<String>>) -> T) -> T {
        let mut guard = self.teams.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn append(&self, team: &str, line: &str) -> Result<(), StoreError> {
        validate_team_name(team)?;
        self.with_teams(|teams| {
            teams
                .entry(team.to_string())
                .or_default()
                .push(line.trim_end().to_string())
        });
        Ok(())
    }

    async fn list(&self, team: &str) -> Result<Vec<String>, StoreError> {
        validate_team_name(team)?;
        Ok(self.with_teams(|teams| teams.get(team).cloned().unwrap_or_default()))
    }

    async fn replace(&self, team: &str, lines: &[String]) -> Result<(), StoreError> {
        validate_team_name(team)?;
        self.with_teams(|teams| teams.insert(team.to_string(), lines.to_vec()));
        Ok(())
    }

    async fn exists(&self, team: &str) -> Result<bool, StoreError> {
        validate_team_name(team)?;
        Ok(self.with_teams(|teams| teams.contains_key(team)))
    }

    async fn touch(&self, team: &str) -> Result<(), StoreError> {
        validate_team_name(team)?;
        self.with_teams(|teams| {
            teams.entry(team.to_string()).or_default();
        });
        Ok(())
    }

    async fn teams(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.with_teams(|teams| teams.keys().cloned().collect()))
    }
}
