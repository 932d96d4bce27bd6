//! # Edit Flow
//!
//! Name → numbered choice → new start → new end. The edited record keeps its name and kind;
//! it is written by removing the old line and appending the new one in a single replace.

use anyhow::Result;
use chrono::Datelike;

use super::{booked_days, notify, parse_choice, reply, require_team, show_main_menu};
use crate::application::limits::{CapCheck, check_cap};
use crate::application::records::{find_by_person, remove_selected};
use crate::application::state::{EditStep, Flow, Session};
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::domain::types::{LeaveRecord, parse_date};
use crate::strings::messages;

pub async fn start(session: &mut Session, chat: &impl ChatProvider) -> Result<()> {
    session.begin(Flow::Edit(EditStep::AwaitingName));
    reply(chat, messages::ASK_EDIT_NAME).await
}

pub async fn handle_step(
    config: &AppConfig,
    store: &dyn RecordStore,
    session: &mut Session,
    chat: &impl ChatProvider,
    step: EditStep,
    input: &str,
) -> Result<()> {
    match step {
        EditStep::AwaitingName => {
            if input.is_empty() {
                session.advance(Flow::Edit(EditStep::AwaitingName));
                return notify(chat, messages::ASK_EDIT_NAME).await;
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
            session.advance(Flow::Edit(EditStep::AwaitingSelection { options }));
            reply(chat, &listing).await
        }
        EditStep::AwaitingSelection { options } => match parse_choice(input, options.len()) {
            Some(i) => {
                let selected = options[i].clone();
                if LeaveRecord::parse(&selected.line).is_err() {
                    session.finish();
                    return notify(chat, messages::RECORD_UNREADABLE).await;
                }
                session.advance(Flow::Edit(EditStep::AwaitingNewStart { selected }));
                reply(chat, messages::ASK_NEW_START).await
            }
            None => {
                session.advance(Flow::Edit(EditStep::AwaitingSelection { options }));
                notify(chat, messages::BAD_CHOICE).await
            }
        },
        EditStep::AwaitingNewStart { selected } => match parse_date(input) {
            Ok(start) => {
                session.advance(Flow::Edit(EditStep::AwaitingNewEnd { selected, start }));
                reply(chat, messages::ASK_NEW_END).await
            }
            Err(_) => {
                session.advance(Flow::Edit(EditStep::AwaitingNewStart { selected }));
                notify(chat, messages::BAD_START).await
            }
        },
        EditStep::AwaitingNewEnd { selected, start } => {
            let end = match parse_date(input) {
                Ok(end) if end >= start => end,
                Ok(_) => {
                    session.advance(Flow::Edit(EditStep::AwaitingNewEnd { selected, start }));
                    return notify(chat, messages::END_BEFORE_START).await;
                }
                Err(_) => {
                    session.advance(Flow::Edit(EditStep::AwaitingNewEnd { selected, start }));
                    return notify(chat, messages::BAD_END).await;
                }
            };
            let Some(team) = require_team(session, chat).await? else {
                return Ok(());
            };
            session.finish();

            let old = LeaveRecord::parse(&selected.line)?;
            let updated = LeaveRecord::new(old.person_name.clone(), start, end, old.kind)?;

            if old.kind.is_limited() {
                let year = start.year();
                let Some(used) =
                    booked_days(config, store, chat, &team, &old.person_name, old.kind, year).await?
                else {
                    return Ok(());
                };
                // The old record only counts toward the year it starts in.
                let old_days = if old.start_date.year() == year { old.days() } else { 0 };
                if let CapCheck::Exceeded { used, requested, cap } =
                    check_cap(used - old_days, updated.days(), config.limits.vacation_days_per_year)
                {
                    tracing::info!(
                        "Rejected edit for '{}' in team '{}': {} + {} > {}",
                        old.person_name,
                        team,
                        used,
                        requested,
                        cap
                    );
                    return reply(chat, &messages::edit_limit_exceeded(cap, used, requested)).await;
                }
            }

            let lines = store.list(&team).await?;
            let Some(mut remaining) = remove_selected(&lines, &selected) else {
                return reply(chat, messages::RECORD_GONE).await;
            };
            remaining.push(updated.to_line());
            store.replace(&team, &remaining).await?;
            tracing::info!("Team '{}': {} -> {}", team, selected.line, updated);

            reply(chat, messages::UPDATED).await?;
            show_main_menu(chat).await
        }
    }
}
