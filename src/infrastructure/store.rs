//! # File Record Store
//!
//! Implements `RecordStore` on top of one UTF-8 text file per team.
//! Appends go straight to the file; `replace` writes a sibling temp file and renames it over the original.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::config::StorageConfig;
use crate::domain::errors::StoreError;
use crate::domain::paths;
use crate::domain::traits::RecordStore;

#[derive(Debug, Clone)]
pub struct FileRecordStore {
    storage: StorageConfig,
}

impl FileRecordStore {
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    fn path(&self, team: &str) -> Result<PathBuf, StoreError> {
        paths::team_file(&self.storage, team)
    }

    async fn ensure_dir(&self, team: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.storage.data_dir)
            .await
            .map_err(|e| StoreError::io(team, e))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn append(&self, team: &str, line: &str) -> Result<(), StoreError> {
        let path = self.path(team)?;
        self.ensure_dir(team).await?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| StoreError::io(team, e))?;
        file.write_all(format!("{}\n", line.trim_end()).as_bytes())
            .await
            .map_err(|e| StoreError::io(team, e))?;
        file.flush().await.map_err(|e| StoreError::io(team, e))?;

        tracing::debug!("Appended record to {}", path.display());
        Ok(())
    }

    async fn list(&self, team: &str) -> Result<Vec<String>, StoreError> {
        let path = self.path(team)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(content
                .lines()
                .map(|l| l.trim_end_matches('\r'))
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::io(team, e)),
        }
    }

    async fn replace(&self, team: &str, lines: &[String]) -> Result<(), StoreError> {
        let path = self.path(team)?;
        self.ensure_dir(team).await?;

        let mut content = String::new();
        for line in lines {
            content.push_str(line.trim_end());
            content.push('\n');
        }

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content)
            .await
            .map_err(|e| StoreError::io(team, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(team, e))?;

        tracing::debug!("Rewrote {} ({} records)", path.display(), lines.len());
        Ok(())
    }

    async fn exists(&self, team: &str) -> Result<bool, StoreError> {
        let path = self.path(team)?;
        fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::io(team, e))
    }

    async fn touch(&self, team: &str) -> Result<(), StoreError> {
        let path = self.path(team)?;
        self.ensure_dir(team).await?;
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| StoreError::io(team, e))?;
        Ok(())
    }

    async fn teams(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = match fs::read_dir(&self.storage.data_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io("*", e)),
        };

        let mut teams = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io("*", e))?
        {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(team) = paths::team_from_file_name(&self.storage, name) {
                teams.push(team.to_string());
            }
        }
        teams.sort();
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileRecordStore {
        FileRecordStore::new(StorageConfig {
            data_dir: dir.path().to_string_lossy().to_string(),
            ..StorageConfig::default()
        })
    }

    #[tokio::test]
    async fn test_missing_team_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.list("Ghost").await.unwrap().is_empty());
        assert!(!store.exists("Ghost").await.unwrap());
    }

    #[tokio::test]
    async fn test_append_and_list_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append("Eng", "B: 02.01.2025 – 02.01.2025 [Отгулы]").await.unwrap();
        store.append("Eng", "A: 01.01.2025 – 01.01.2025 [Отпуск]").await.unwrap();

        let lines = store.list("Eng").await.unwrap();
        assert_eq!(
            lines,
            vec![
                "B: 02.01.2025 – 02.01.2025 [Отгулы]".to_string(),
                "A: 01.01.2025 – 01.01.2025 [Отпуск]".to_string(),
            ]
        );

        let raw = std::fs::read_to_string(dir.path().join("vacations_Eng.txt")).unwrap();
        assert!(raw.ends_with("[Отпуск]\n"));
    }

    #[tokio::test]
    async fn test_replace_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append("Eng", "A: 01.01.2025 – 01.01.2025 [Отпуск]").await.unwrap();
        store.replace("Eng", &["C: 03.01.2025 – 03.01.2025 [Отпуск]".to_string()]).await.unwrap();

        assert_eq!(store.list("Eng").await.unwrap().len(), 1);
        assert!(!dir.path().join("vacations_Eng.txt.tmp").exists());

        store.replace("Eng", &[]).await.unwrap();
        assert!(store.list("Eng").await.unwrap().is_empty());
        assert!(store.exists("Eng").await.unwrap());
    }

    #[tokio::test]
    async fn test_teams_scans_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.touch("QA").await.unwrap();
        store.touch("Eng").await.unwrap();
        std::fs::write(dir.path().join("session.log"), "log").unwrap();

        assert_eq!(store.teams().await.unwrap(), vec!["Eng".to_string(), "QA".to_string()]);
        assert!(store.list("QA").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_invalid_team_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let err = store.touch("../etc").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidTeamName(_)));
    }
}
