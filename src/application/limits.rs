//! # Limit Calculator
//!
//! Counts how many days of a leave kind a person has booked in a calendar year,
//! and checks requests against the yearly cap.
//! Lines that fail to parse are reported back instead of disappearing.

use anyhow::Result;
use chrono::Datelike;

use crate::domain::config::ParsePolicy;
use crate::domain::errors::RecordParseError;
use crate::domain::traits::RecordStore;
use crate::domain::types::{LeaveKind, LeaveRecord, line_matches_person};

/// A stored line the calculator could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: String,
    pub error: RecordParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    pub days: i64,
    pub skipped: Vec<SkippedLine>,
}

/// Result of checking a request against the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapCheck {
    Allowed,
    Exceeded { used: i64, requested: i64, cap: i64 },
}

/// Sums `(end - start) + 1` over the person's records of `kind` starting in `year`.
pub fn sum_days<S: AsRef<str>>(
    lines: &[S],
    person: &str,
    kind: LeaveKind,
    year: i32,
    policy: ParsePolicy,
) -> Result<Usage, RecordParseError> {
    let mut usage = Usage::default();

    for line in lines.iter().map(AsRef::as_ref) {
        if !line_matches_person(line, person) {
            continue;
        }
        let record = match LeaveRecord::parse(line) {
            Ok(record) => record,
            Err(error) => match policy {
                ParsePolicy::Strict => return Err(error),
                ParsePolicy::Skip => {
                    tracing::warn!("Skipping unreadable record {:?}: {}", line, error);
                    usage.skipped.push(SkippedLine {
                        line: line.to_string(),
                        error,
                    });
                    continue;
                }
            },
        };
        if record.kind == kind && record.start_date.year() == year {
            usage.days += record.days();
        }
    }

    Ok(usage)
}

/// Store-backed variant of [`sum_days`].
pub async fn used_days(
    store: &dyn RecordStore,
    team: &str,
    person: &str,
    kind: LeaveKind,
    year: i32,
    policy: ParsePolicy,
) -> Result<Usage> {
    let lines = store.list(team).await?;
    Ok(sum_days(&lines, person, kind, year, policy)?)
}

pub fn check_cap(used: i64, requested: i64, cap: i64) -> CapCheck {
    if used + requested > cap {
        CapCheck::Exceeded {
            used,
            requested,
            cap,
        }
    } else {
        CapCheck::Allowed
    }
}
