//! # Delete Flow
//!
//! Name → numbered choice → yes/no confirmation. Removes exactly the chosen line.

use anyhow::Result;

use super::{is_no, is_yes, notify, parse_choice, reply, require_team, show_main_menu};
use crate::application::records::{find_by_person, remove_selected};
use crate::application::state::{DeleteStep, Flow, Session};
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::strings::messages;

pub async fn start(session: &mut Session, chat: &impl ChatProvider) -> Result<()> {
    session.begin(Flow::Delete(DeleteStep::AwaitingName));
    reply(chat, messages::ASK_DELETE_NAME).await
}

pub async fn handle_step(
    store: &dyn RecordStore,
    session: &mut Session,
    chat: &impl ChatProvider,
    step: DeleteStep,
    input: &str,
) -> Result<()> {
    match step {
        DeleteStep::AwaitingName => {
            if input.is_empty() {
                session.advance(Flow::Delete(DeleteStep::AwaitingName));
                return notify(chat, messages::ASK_DELETE_NAME).await;
            }
            let Some(team) = require_team(session, chat).await? else {
                return Ok(());
            };
            let options = find_by_person(&store.list(&team).await?, input);
            if options.is_empty() {
                session.finish();
                return reply(chat, messages::NOT_FOUND).await;
            }
            let listing = messages::choose_record(&options);
            session.advance(Flow::Delete(DeleteStep::AwaitingSelection { options }));
            reply(chat, &listing).await
        }
        DeleteStep::AwaitingSelection { options } => match parse_choice(input, options.len()) {
            Some(i) => {
                let selected = options[i].clone();
                let question = messages::confirm_delete(&selected.line);
                session.advance(Flow::Delete(DeleteStep::AwaitingConfirmation { selected }));
                reply(chat, &question).await?;
                reply(chat, messages::YES_NO).await
            }
            None => {
                session.advance(Flow::Delete(DeleteStep::AwaitingSelection { options }));
                notify(chat, messages::BAD_CHOICE).await
            }
        },
        DeleteStep::AwaitingConfirmation { selected } => {
            if is_yes(input) {
                let Some(team) = require_team(session, chat).await? else {
                    return Ok(());
                };
                session.finish();
                let lines = store.list(&team).await?;
                match remove_selected(&lines, &selected) {
                    Some(remaining) => {
                        store.replace(&team, &remaining).await?;
                        tracing::info!("Team '{}': deleted {}", team, selected.line);
                        reply(chat, messages::DELETED).await?;
                    }
                    None => reply(chat, messages::RECORD_GONE).await?,
                }
            } else if is_no(input) {
                session.finish();
                reply(chat, messages::CANCELLED).await?;
            } else {
                session.advance(Flow::Delete(DeleteStep::AwaitingConfirmation { selected }));
                return notify(chat, messages::YES_NO).await;
            }
            show_main_menu(chat).await
        }
    }
}
