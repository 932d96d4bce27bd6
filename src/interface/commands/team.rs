//! # Team Registration
//!
//! Handles `.vacabot` and the "switch team" button.
//! Asks for a team name, joins known teams directly and asks before creating new ones.

use anyhow::Result;

use super::{is_yes, notify, reply, show_main_menu};
use crate::application::registry::TeamRegistry;
use crate::application::state::{Flow, RegisterStep, Session};
use crate::domain::paths::validate_team_name;
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::strings::messages;

/// `.vacabot`: drops any pending flow, then registers or shows the menu.
pub async fn handle_start(session: &mut Session, chat: &impl ChatProvider) -> Result<()> {
    session.finish();
    if session.active_team.is_none() {
        session.begin(Flow::Register(RegisterStep::AwaitingName));
        reply(chat, messages::ASK_TEAM).await
    } else {
        show_main_menu(chat).await
    }
}

/// Leaves the current team (it is not deleted) and asks for another one.
pub async fn handle_switch(session: &mut Session, chat: &impl ChatProvider) -> Result<()> {
    if let Some(team) = session.active_team.take() {
        tracing::info!("Room {} left team '{}'", chat.room_id(), team);
    }
    session.begin(Flow::Register(RegisterStep::AwaitingName));
    reply(chat, messages::ASK_TEAM_SWITCH).await
}

pub async fn handle_step(
    store: &dyn RecordStore,
    teams: &mut TeamRegistry,
    session: &mut Session,
    chat: &impl ChatProvider,
    step: RegisterStep,
    input: &str,
) -> Result<()> {
    match step {
        RegisterStep::AwaitingName => {
            if validate_team_name(input).is_err() {
                session.advance(Flow::Register(RegisterStep::AwaitingName));
                return notify(chat, &messages::invalid_team_name(input)).await;
            }
            if teams.is_known(store, input).await? {
                teams.register(store, input).await?;
                session.active_team = Some(input.to_string());
                session.finish();
                reply(chat, &messages::team_joined(input)).await?;
                show_main_menu(chat).await
            } else {
                session.advance(Flow::Register(RegisterStep::AwaitingConfirmation {
                    team: input.to_string(),
                }));
                reply(chat, &messages::team_not_found(input)).await
            }
        }
        RegisterStep::AwaitingConfirmation { team } => {
            if is_yes(input) {
                teams.register(store, &team).await?;
                session.active_team = Some(team.clone());
                session.finish();
                reply(chat, &messages::team_created(&team)).await?;
                show_main_menu(chat).await
            } else {
                session.advance(Flow::Register(RegisterStep::AwaitingName));
                reply(chat, messages::ASK_TEAM_AGAIN).await
            }
        }
    }
}
