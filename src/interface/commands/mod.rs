//! # Command Handlers
//!
//! Contains the handler functions for each menu action and conversation flow
//! (add, delete, edit, search, team registration, list, help).
//! These handlers are invoked by the Router.

pub mod add;
pub mod delete;
pub mod edit;
pub mod help;
pub mod list;
pub mod search;
pub mod team;

use anyhow::Result;

use crate::application::limits;
use crate::application::state::Session;
use crate::domain::config::AppConfig;
use crate::domain::errors::RecordParseError;
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::domain::types::LeaveKind;
use crate::strings::help as help_text;
use crate::strings::{menu, messages};

/// Sends a tracked reply.
pub async fn reply(chat: &impl ChatProvider, content: &str) -> Result<()> {
    chat.send_message(content)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

/// Sends a re-prompt or error notice.
pub async fn notify(chat: &impl ChatProvider, content: &str) -> Result<()> {
    chat.send_notification(content)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn show_main_menu(chat: &impl ChatProvider) -> Result<()> {
    reply(chat, help_text::INTRO).await?;
    reply(chat, &format!("{}\n{}", messages::MENU_PROMPT, menu::render())).await
}

/// Active team of the session, or tells the user to pick one and ends the flow.
pub async fn require_team(session: &mut Session, chat: &impl ChatProvider) -> Result<Option<String>> {
    match session.active_team.clone() {
        Some(team) => Ok(Some(team)),
        None => {
            session.finish();
            notify(chat, messages::NO_ACTIVE_TEAM).await?;
            Ok(None)
        }
    }
}

/// Days of `kind` already booked by `person` in `year`.
/// Returns `None` after telling the user when strict parsing hit a corrupt line.
pub async fn booked_days(
    config: &AppConfig,
    store: &dyn RecordStore,
    chat: &impl ChatProvider,
    team: &str,
    person: &str,
    kind: LeaveKind,
    year: i32,
) -> Result<Option<i64>> {
    match limits::used_days(store, team, person, kind, year, config.limits.parse_policy).await {
        Ok(usage) => Ok(Some(usage.days)),
        Err(e) if e.downcast_ref::<RecordParseError>().is_some() => {
            tracing::error!("Refusing limit check for team '{}': {}", team, e);
            notify(chat, messages::STORAGE_CORRUPTED).await?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// 1-based choice from a numbered list, as a 0-based index.
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "да" | "yes")
}

pub fn is_no(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "нет" | "no")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockChat;

    #[tokio::test]
    async fn test_main_menu_opens_with_intro() {
        let chat = MockChat::new("!room:example.org");
        show_main_menu(&chat).await.unwrap();
        let sent = chat.messages();
        assert_eq!(sent[0], help_text::INTRO);
        assert!(sent[1].starts_with(messages::MENU_PROMPT));
        assert!(sent[1].contains(menu::ADD_VACATION));
    }

    #[test]
    fn test_parse_choice_bounds() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("two", 3), None);
    }

    #[test]
    fn test_yes_no_answers() {
        assert!(is_yes("Да"));
        assert!(is_yes("yes"));
        assert!(is_no("НЕТ"));
        assert!(!is_yes("ok"));
        assert!(!is_no("ok"));
    }
}
