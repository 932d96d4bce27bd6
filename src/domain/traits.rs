//! # Domain Traits
//!
//! Abstract interfaces for the chat platform and for record storage.
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a notification (not tracked)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Per-team line storage. One line is one serialized leave record.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a single line to the team's records, creating them if needed.
    async fn append(&self, team: &str, line: &str) -> Result<(), StoreError>;

    /// All lines in stored order. A team without records yields an empty list.
    async fn list(&self, team: &str) -> Result<Vec<String>, StoreError>;

    /// Atomically replace the team's records with `lines`.
    async fn replace(&self, team: &str, lines: &[String]) -> Result<(), StoreError>;

    async fn exists(&self, team: &str) -> Result<bool, StoreError>;

    /// Create an empty record set for the team if it does not exist yet.
    async fn touch(&self, team: &str) -> Result<(), StoreError>;

    /// Names of all teams that have a record set, sorted.
    async fn teams(&self) -> Result<Vec<String>, StoreError>;
}
