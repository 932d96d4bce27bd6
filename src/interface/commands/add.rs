//! # Add Flow
//!
//! Name → start date → end date. Vacation is checked against the yearly cap before it is stored.

use anyhow::Result;
use chrono::Datelike;

use super::{booked_days, notify, reply, require_team, show_main_menu};
use crate::application::limits::{CapCheck, check_cap};
use crate::application::state::{AddStep, Flow, Session};
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, RecordStore};
use crate::domain::types::{LeaveKind, LeaveRecord, is_valid_person_name, parse_date};
use crate::strings::messages;

pub async fn start(session: &mut Session, chat: &impl ChatProvider, kind: LeaveKind) -> Result<()> {
    session.begin(Flow::Add(AddStep::AwaitingName { kind }));
    reply(chat, messages::ASK_NAME).await
}

pub async fn handle_step(
    config: &AppConfig,
    store: &dyn RecordStore,
    session: &mut Session,
    chat: &impl ChatProvider,
    step: AddStep,
    input: &str,
) -> Result<()> {
    match step {
        AddStep::AwaitingName { kind } => {
            if input.is_empty() {
                session.advance(Flow::Add(AddStep::AwaitingName { kind }));
                return notify(chat, messages::EMPTY_NAME).await;
            }
            if !is_valid_person_name(input) {
                session.advance(Flow::Add(AddStep::AwaitingName { kind }));
                return notify(chat, messages::INVALID_NAME).await;
            }
            session.advance(Flow::Add(AddStep::AwaitingStart {
                kind,
                name: input.to_string(),
            }));
            reply(chat, messages::ASK_START).await
        }
        AddStep::AwaitingStart { kind, name } => match parse_date(input) {
            Ok(start) => {
                session.advance(Flow::Add(AddStep::AwaitingEnd { kind, name, start }));
                reply(chat, messages::ASK_END).await
            }
            Err(_) => {
                session.advance(Flow::Add(AddStep::AwaitingStart { kind, name }));
                notify(chat, messages::BAD_START).await
            }
        },
        AddStep::AwaitingEnd { kind, name, start } => {
            let end = match parse_date(input) {
                Ok(end) if end >= start => end,
                Ok(_) => {
                    session.advance(Flow::Add(AddStep::AwaitingEnd { kind, name, start }));
                    return notify(chat, messages::END_BEFORE_START).await;
                }
                Err(_) => {
                    session.advance(Flow::Add(AddStep::AwaitingEnd { kind, name, start }));
                    return notify(chat, messages::BAD_END).await;
                }
            };
            let Some(team) = require_team(session, chat).await? else {
                return Ok(());
            };
            session.finish();

            let record = LeaveRecord::new(name, start, end, kind)?;
            let days = record.days();

            if kind.is_limited() {
                let Some(used) =
                    booked_days(config, store, chat, &team, &record.person_name, kind, start.year())
                        .await?
                else {
                    return Ok(());
                };
                if let CapCheck::Exceeded { used, requested, cap } =
                    check_cap(used, days, config.limits.vacation_days_per_year)
                {
                    tracing::info!(
                        "Rejected {} for '{}' in team '{}': {} + {} > {}",
                        kind,
                        record.person_name,
                        team,
                        used,
                        requested,
                        cap
                    );
                    return reply(chat, &messages::limit_exceeded(cap, used, requested)).await;
                }
            }

            store.append(&team, &record.to_line()).await?;
            tracing::info!("Team '{}': added {}", team, record);

            reply(chat, &messages::record_saved(kind, days)).await?;
            show_main_menu(chat).await
        }
    }
}
