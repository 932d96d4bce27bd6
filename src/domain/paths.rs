//! # Storage Paths
//!
//! Centralized definitions for where team files and logs live.

use std::path::{Path, PathBuf};

use crate::domain::config::StorageConfig;
use crate::domain::errors::StoreError;

pub const DEFAULT_CONFIG_FILE: &str = "data/config.yaml";
pub const SESSION_LOG_FILE: &str = "session.log";

/// Rejects names that cannot safely become part of a file name.
pub fn validate_team_name(team: &str) -> Result<(), StoreError> {
    let invalid = team.trim().is_empty()
        || team == "."
        || team == ".."
        || team.contains(['/', '\\'])
        || team.chars().any(char::is_control);
    if invalid {
        return Err(StoreError::InvalidTeamName(team.to_string()));
    }
    Ok(())
}

/// Full path of a team's record file, e.g. `data/vacations_Eng.txt`.
pub fn team_file(storage: &StorageConfig, team: &str) -> Result<PathBuf, StoreError> {
    validate_team_name(team)?;
    Ok(Path::new(&storage.data_dir).join(format!(
        "{}{}{}",
        storage.file_prefix, team, storage.file_suffix
    )))
}

/// Inverse of [`team_file`] for a bare file name. Returns `None` for unrelated files.
pub fn team_from_file_name<'a>(storage: &StorageConfig, file_name: &'a str) -> Option<&'a str> {
    let team = file_name
        .strip_prefix(storage.file_prefix.as_str())?
        .strip_suffix(storage.file_suffix.as_str())?;
    (!team.is_empty()).then_some(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_file_layout() {
        let storage = StorageConfig::default();
        let path = team_file(&storage, "Eng").unwrap();
        assert_eq!(path, Path::new("data").join("vacations_Eng.txt"));
        assert_eq!(team_from_file_name(&storage, "vacations_Eng.txt"), Some("Eng"));
        assert_eq!(team_from_file_name(&storage, "session.log"), None);
        assert_eq!(team_from_file_name(&storage, "vacations_.txt"), None);
    }

    #[test]
    fn test_rejects_path_like_names() {
        for name in ["", "  ", ".", "..", "a/b", "a\\b", "a\0b", "Eng\nQA", "Eng\r", "a\tb"] {
            assert!(validate_team_name(name).is_err(), "{name:?} should be rejected");
        }
        assert!(validate_team_name("Команда A").is_ok());
    }
}
