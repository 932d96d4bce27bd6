//! # Menu Labels
//!
//! The fixed button labels of the main menu. Incoming text is matched against them exactly.

use crate::domain::types::LeaveKind;

pub const ADD_VACATION: &str = "➕ Отпуск";
pub const ADD_TIME_OFF: &str = "➕ Отгулы";
pub const ADD_UNPAID_LEAVE: &str = "➕ ОЗС";
pub const ADD_BUSINESS_TRIP: &str = "➕ Командировка";
pub const LIST: &str = "📅 Отпуска";
pub const EDIT: &str = "✏️ Редактировать";
pub const DELETE: &str = "❌ Удалить";
pub const HELP: &str = "ℹ️ Помощь";
pub const SWITCH_TEAM: &str = "🔄 Сменить команду";
pub const SEARCH: &str = "🔍 Поиск";

/// Keyboard rows, in display order.
pub const ROWS: [&[&str]; 3] = [
    &[ADD_VACATION, ADD_TIME_OFF, ADD_UNPAID_LEAVE, ADD_BUSINESS_TRIP],
    &[LIST, EDIT, DELETE, HELP],
    &[SWITCH_TEAM, SEARCH],
];

/// Control commands that bypass a pending flow.
pub const START_COMMAND: &str = ".vacabot";
pub const CANCEL_COMMAND: &str = ".cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add(LeaveKind),
    List,
    Edit,
    Delete,
    Help,
    SwitchTeam,
    Search,
}

impl MenuAction {
    pub fn from_label(text: &str) -> Option<Self> {
        let action = match text {
            ADD_VACATION => MenuAction::Add(LeaveKind::Vacation),
            ADD_TIME_OFF => MenuAction::Add(LeaveKind::TimeOff),
            ADD_UNPAID_LEAVE => MenuAction::Add(LeaveKind::UnpaidLeave),
            ADD_BUSINESS_TRIP => MenuAction::Add(LeaveKind::BusinessTrip),
            LIST => MenuAction::List,
            EDIT => MenuAction::Edit,
            DELETE => MenuAction::Delete,
            HELP => MenuAction::Help,
            SWITCH_TEAM => MenuAction::SwitchTeam,
            SEARCH => MenuAction::Search,
            _ => return None,
        };
        Some(action)
    }
}

/// Text rendition of the reply keyboard.
pub fn render() -> String {
    ROWS.iter()
        .map(|row| row.join("   "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_maps_to_an_action() {
        for label in ROWS.iter().flat_map(|row| row.iter()) {
            assert!(MenuAction::from_label(label).is_some(), "{label} unmapped");
        }
        assert_eq!(
            MenuAction::from_label(ADD_UNPAID_LEAVE),
            Some(MenuAction::Add(LeaveKind::UnpaidLeave))
        );
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(MenuAction::from_label("Отпуск"), None);
        assert_eq!(MenuAction::from_label("➕ отпуск"), None);
        assert_eq!(MenuAction::from_label(""), None);
    }
}
