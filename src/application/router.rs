//! # Command Router
//!
//! Routes incoming messages to the appropriate handler (in `interface/commands`).
//! Priority: control commands (`.vacabot`, `.cancel`), then a menu label (which abandons
//! any pending flow), then a pending conversation flow. Everything else is ignored.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::state::{BotState, Flow};
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::interface::commands::{self, add, delete, edit, help, list, search, team};
use crate::strings::menu::{CANCEL_COMMAND, MenuAction, START_COMMAND};
use crate::strings::messages;

pub struct CommandRouter {
    config: AppConfig,
    store: Arc<dyn RecordStore>,
    state: Arc<Mutex<BotState>>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>, state: Arc<Mutex<BotState>>) -> Self {
        Self {
            config,
            store,
            state,
        }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        let room_id = chat.room_id();
        tracing::info!(
            "Router dispatching '{}' room='{}' sender='{}'",
            msg,
            room_id,
            sender
        );

        // One message at a time across all rooms
        let mut guard = self.state.lock().await;

        if let Err(e) = self.dispatch(&mut guard, chat, msg).await {
            tracing::error!("Failed to handle message in {}: {:#}", room_id, e);
            guard.sessions.session(&room_id).finish();
            commands::notify(chat, messages::OPERATION_FAILED).await?;
        }
        Ok(())
    }

    async fn dispatch<C>(&self, state: &mut BotState, chat: &C, msg: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let BotState { sessions, teams } = state;
        let session = sessions.session(&chat.room_id());
        let store = self.store.as_ref();

        // 1. Control commands bypass any pending flow
        match msg {
            START_COMMAND => return team::handle_start(session, chat).await,
            CANCEL_COMMAND => {
                if let Some(flow) = session.flow.take() {
                    tracing::info!("Cancelled {} flow in {}", flow.name(), chat.room_id());
                    commands::reply(chat, messages::CANCELLED).await?;
                }
                return if session.active_team.is_some() {
                    commands::show_main_menu(chat).await
                } else {
                    commands::notify(chat, messages::REGISTER_FIRST).await
                };
            }
            _ => {}
        }

        let action = MenuAction::from_label(msg);

        // 2. Pending conversation, unless a menu label starts another one
        if let Some(flow) = session.flow.take() {
            match (action, session.active_team.is_some()) {
                (Some(_), true) => {
                    tracing::info!("Abandoning {} flow in {} for a menu action", flow.name(), chat.room_id());
                }
                (Some(_), false) => {
                    session.advance(flow);
                    return commands::notify(chat, messages::MENU_NEEDS_TEAM).await;
                }
                (None, _) => {
                    tracing::debug!("Continuing {} flow in {}", flow.name(), chat.room_id());
                    return match flow {
                        Flow::Register(step) => team::handle_step(store, teams, session, chat, step, msg).await,
                        Flow::Add(step) => add::handle_step(&self.config, store, session, chat, step, msg).await,
                        Flow::Delete(step) => delete::handle_step(store, session, chat, step, msg).await,
                        Flow::Edit(step) => edit::handle_step(&self.config, store, session, chat, step, msg).await,
                        Flow::Search(step) => search::handle_step(store, teams, session, chat, step, msg).await,
                    };
                }
            }
        }

        // 3. Everything below needs a team
        if session.active_team.is_none() {
            return commands::notify(chat, messages::REGISTER_FIRST).await;
        }

        // 4. Menu buttons
        let Some(action) = action else {
            tracing::debug!("Ignoring unrecognised message in {}", chat.room_id());
            return Ok(());
        };

        match action {
            MenuAction::Add(kind) => add::start(session, chat, kind).await,
            MenuAction::List => list::handle_list(store, session, chat).await,
            MenuAction::Edit => edit::start(session, chat).await,
            MenuAction::Delete => delete::start(session, chat).await,
            MenuAction::Help => help::handle_help(chat).await,
            MenuAction::SwitchTeam => team::handle_switch(session, chat).await,
            MenuAction::Search => search::start(session, chat).await,
        }
    }
}
