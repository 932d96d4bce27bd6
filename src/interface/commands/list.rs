//! # List Command
//!
//! Shows the active team's records ordered by start date.

use anyhow::Result;

use super::{reply, require_team};
use crate::application::records::sort_by_start;
use crate::application::state::Session;
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::strings::messages;

pub async fn handle_list(
    store: &dyn RecordStore,
    session: &mut Session,
    chat: &impl ChatProvider,
) -> Result<()> {
    let Some(team) = require_team(session, chat).await? else {
        return Ok(());
    };
    let lines = store.list(&team).await?;
    if lines.is_empty() {
        return reply(chat, messages::LIST_EMPTY).await;
    }
    reply(chat, &messages::list_records(&sort_by_start(&lines))).await
}
