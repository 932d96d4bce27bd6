//! # Bot State
//!
//! Defines the in-memory state of the bot (`BotState`): per-chat sessions and the team registry.
//! A session holds the active team and at most one pending conversation flow.
//! Nothing here is persisted; a restart starts every chat from scratch.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::application::registry::TeamRegistry;
use crate::domain::types::LeaveKind;

/// A record picked from a choice list: its position in the team's lines and the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterStep {
    AwaitingName,
    AwaitingConfirmation { team: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddStep {
    AwaitingName {
        kind: LeaveKind,
    },
    AwaitingStart {
        kind: LeaveKind,
        name: String,
    },
    AwaitingEnd {
        kind: LeaveKind,
        name: String,
        start: NaiveDate,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStep {
    AwaitingName,
    AwaitingSelection { options: Vec<Selection> },
    AwaitingConfirmation { selected: Selection },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    AwaitingName,
    AwaitingSelection { options: Vec<Selection> },
    AwaitingNewStart { selected: Selection },
    AwaitingNewEnd { selected: Selection, start: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    AwaitingName,
}

/// The single pending conversation of a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Register(RegisterStep),
    Add(AddStep),
    Delete(DeleteStep),
    Edit(EditStep),
    Search(SearchStep),
}

impl Flow {
    pub fn name(&self) -> &'static str {
        match self {
            Flow::Register(_) => "register",
            Flow::Add(_) => "add",
            Flow::Delete(_) => "delete",
            Flow::Edit(_) => "edit",
            Flow::Search(_) => "search",
        }
    }
}

/// State for a single chat room.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub active_team: Option<String>,
    pub flow: Option<Flow>,
}

impl Session {
    /// Replaces any pending flow; only one can be active at a time.
    pub fn begin(&mut self, flow: Flow) {
        if let Some(previous) = self.flow.replace(flow) {
            tracing::debug!("Abandoning pending {} flow", previous.name());
        }
    }

    /// Moves the pending flow to its next step (or re-enters the same one).
    pub fn advance(&mut self, flow: Flow) {
        self.flow = Some(flow);
    }

    pub fn finish(&mut self) {
        self.flow = None;
    }
}

/// Mapping from chat identifier to its session.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the session for a chat.
    pub fn session(&mut self, chat_id: &str) -> &mut Session {
        self.sessions.entry(chat_id.to_string()).or_default()
    }
}

/// Everything the conversation engine keeps in memory.
#[derive(Debug, Default)]
pub struct BotState {
    pub sessions: SessionStore,
    pub teams: TeamRegistry,
}

impl BotState {
    pub fn new(teams: TeamRegistry) -> Self {
        Self {
            sessions: SessionStore::new(),
            teams,
        }
    }
}
