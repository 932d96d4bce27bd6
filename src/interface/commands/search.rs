//! # Global Search
//!
//! Looks a colleague up across every known team and groups the hits per team.

use anyhow::Result;

use super::{notify, reply, show_main_menu};
use crate::application::registry::TeamRegistry;
use crate::application::state::{Flow, SearchStep, Session};
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::domain::types::line_matches_person;
use crate::strings::messages;

pub async fn start(session: &mut Session, chat: &impl ChatProvider) -> Result<()> {
    session.begin(Flow::Search(SearchStep::AwaitingName));
    reply(chat, messages::ASK_SEARCH_NAME).await
}

pub async fn handle_step(
    store: &dyn RecordStore,
    teams: &mut TeamRegistry,
    session: &mut Session,
    chat: &impl ChatProvider,
    step: SearchStep,
    input: &str,
) -> Result<()> {
    match step {
        SearchStep::AwaitingName => {
            if input.is_empty() {
                session.advance(Flow::Search(SearchStep::AwaitingName));
                return notify(chat, messages::ASK_SEARCH_NAME).await;
            }
            session.finish();

            let mut blocks = Vec::new();
            for team in teams.all(store).await? {
                let hits: Vec<String> = store
                    .list(&team)
                    .await?
                    .into_iter()
                    .filter(|line| line_matches_person(line, input))
                    .collect();
                if !hits.is_empty() {
                    blocks.push(messages::search_team_block(&team, &hits));
                }
            }
            tracing::info!("Search for '{}' matched {} team(s)", input, blocks.len());

            if blocks.is_empty() {
                reply(chat, &messages::search_not_found(input)).await?;
            } else {
                reply(chat, &blocks.join("\n\n")).await?;
            }
            show_main_menu(chat).await
        }
    }
}
