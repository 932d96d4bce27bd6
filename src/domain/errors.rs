//! # Domain Errors
//!
//! Typed errors for record parsing and storage. Flow handlers wrap them in
//! `anyhow` when they only need to report a failure.

use thiserror::Error;

/// A stored line that does not follow `<name>: <DD.MM.YYYY> – <DD.MM.YYYY> [<kind>]`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordParseError {
    #[error("malformed record line: {0:?}")]
    Malformed(String),

    #[error("invalid date {0:?} (expected DD.MM.YYYY)")]
    InvalidDate(String),

    #[error("unknown leave kind {0:?}")]
    UnknownKind(String),

    #[error("end date is before start date")]
    EndBeforeStart,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid team name {0:?}")]
    InvalidTeamName(String),

    #[error("storage I/O failed for team {team:?}: {source}")]
    Io {
        team: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn io(team: &str, source: std::io::Error) -> Self {
        Self::Io {
            team: team.to_string(),
            source,
        }
    }
}
