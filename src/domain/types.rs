//! # Domain Types
//!
//! Leave kinds, leave records and the one-line text format they are stored in.

use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::domain::errors::RecordParseError;

/// Date format used both for user input and for stored lines.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static RECORD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>.+?):\s+(?P<start>\d{1,2}\.\d{1,2}\.\d{4})\s*[–-]\s*(?P<end>\d{1,2}\.\d{1,2}\.\d{4})(?:\s*\[(?P<kind>[^\]]*)\])?\s*$",
    )
    .expect("record line regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveKind {
    Vacation,
    TimeOff,
    UnpaidLeave,
    BusinessTrip,
}

impl LeaveKind {
    pub const ALL: [LeaveKind; 4] = [
        LeaveKind::Vacation,
        LeaveKind::TimeOff,
        LeaveKind::UnpaidLeave,
        LeaveKind::BusinessTrip,
    ];

    /// Label written into the stored line.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveKind::Vacation => "Отпуск",
            LeaveKind::TimeOff => "Отгулы",
            LeaveKind::UnpaidLeave => "Отпуск за свой счёт",
            LeaveKind::BusinessTrip => "Командировка",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Отпуск" => Some(LeaveKind::Vacation),
            "Отгулы" => Some(LeaveKind::TimeOff),
            // Older files carry the spelling without "ё".
            "Отпуск за свой счёт" | "Отпуск за свой счет" => Some(LeaveKind::UnpaidLeave),
            "Командировка" => Some(LeaveKind::BusinessTrip),
            _ => None,
        }
    }

    /// Only regular vacation counts against the yearly cap.
    pub fn is_limited(&self) -> bool {
        matches!(self, LeaveKind::Vacation)
    }
}

impl fmt::Display for LeaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRecord {
    pub person_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: LeaveKind,
}

impl LeaveRecord {
    pub fn new(
        person_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        kind: LeaveKind,
    ) -> Result<Self, RecordParseError> {
        let person_name = person_name.into();
        if !is_valid_person_name(&person_name) {
            return Err(RecordParseError::Malformed(person_name));
        }
        if end_date < start_date {
            return Err(RecordParseError::EndBeforeStart);
        }
        Ok(Self {
            person_name,
            start_date,
            end_date,
            kind,
        })
    }

    /// Inclusive number of calendar days.
    pub fn days(&self) -> i64 {
        days_between(self.start_date, self.end_date)
    }

    pub fn to_line(&self) -> String {
        format!(
            "{}: {} – {} [{}]",
            self.person_name,
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT),
            self.kind.label()
        )
    }

    /// Parses one stored line. A line without a `[kind]` suffix is a vacation.
    pub fn parse(line: &str) -> Result<Self, RecordParseError> {
        let caps = RECORD_LINE
            .captures(line.trim())
            .ok_or_else(|| RecordParseError::Malformed(line.to_string()))?;

        let start = parse_date(&caps["start"])?;
        let end = parse_date(&caps["end"])?;
        let kind = match caps.name("kind") {
            Some(m) => LeaveKind::from_label(m.as_str())
                .ok_or_else(|| RecordParseError::UnknownKind(m.as_str().to_string()))?,
            None => LeaveKind::Vacation,
        };

        Self::new(caps["name"].trim(), start, end, kind)
    }
}

impl fmt::Display for LeaveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, RecordParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| RecordParseError::InvalidDate(input.trim().to_string()))
}

pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// A stored record is exactly one line, so names cannot carry line breaks or other control characters.
pub fn is_valid_person_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.chars().any(char::is_control)
}

/// Exact-prefix match on `"<name>:"`, the way records are looked up by person.
pub fn line_matches_person(line: &str, person: &str) -> bool {
    line.strip_prefix(person)
        .is_some_and(|rest| rest.starts_with(':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_line_format() {
        let record =
            LeaveRecord::new("Ivan Petrov", date(1, 1, 2025), date(14, 1, 2025), LeaveKind::Vacation)
                .unwrap();
        assert_eq!(record.to_line(), "Ivan Petrov: 01.01.2025 – 14.01.2025 [Отпуск]");
        assert_eq!(record.days(), 14);
    }

    #[test]
    fn test_parse_stored_line() {
        let record =
            LeaveRecord::parse("Anna Smirnova: 03.03.2025 – 04.03.2025 [Командировка]\n").unwrap();
        assert_eq!(record.person_name, "Anna Smirnova");
        assert_eq!(record.start_date, date(3, 3, 2025));
        assert_eq!(record.kind, LeaveKind::BusinessTrip);
        assert_eq!(record.days(), 2);
    }

    #[test]
    fn test_parse_legacy_spellings() {
        let record = LeaveRecord::parse("A: 01.01.2025 – 01.01.2025 [Отпуск за свой счет]").unwrap();
        assert_eq!(record.kind, LeaveKind::UnpaidLeave);

        let record = LeaveRecord::parse("A: 01.01.2025 – 02.01.2025").unwrap();
        assert_eq!(record.kind, LeaveKind::Vacation);
    }

    #[test]
    fn test_parse_name_with_colon() {
        let record = LeaveRecord::parse("Ivan: Jr: 01.01.2025 – 02.01.2025 [Отгулы]").unwrap();
        assert_eq!(record.person_name, "Ivan: Jr");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            LeaveRecord::parse("garbage"),
            Err(RecordParseError::Malformed(_))
        ));
        assert!(matches!(
            LeaveRecord::parse("A: 31.02.2025 – 01.03.2025 [Отпуск]"),
            Err(RecordParseError::InvalidDate(_))
        ));
        assert!(matches!(
            LeaveRecord::parse("A: 01.01.2025 – 02.01.2025 [Больничный]"),
            Err(RecordParseError::UnknownKind(_))
        ));
        assert_eq!(
            LeaveRecord::parse("A: 05.01.2025 – 02.01.2025 [Отпуск]"),
            Err(RecordParseError::EndBeforeStart)
        );
    }

    #[test]
    fn test_name_cannot_span_lines() {
        let day = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(is_valid_person_name("Ivan: Jr"));
        assert!(!is_valid_person_name("X\nIvan Petrov"));
        assert!(!is_valid_person_name("Ivan\r"));
        assert!(!is_valid_person_name("   "));
        assert!(matches!(
            LeaveRecord::new("X\nIvan Petrov", day, day, LeaveKind::Vacation),
            Err(RecordParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_only_vacation_is_limited() {
        let limited: Vec<_> = LeaveKind::ALL.iter().filter(|k| k.is_limited()).collect();
        assert_eq!(limited, vec![&LeaveKind::Vacation]);
    }

    #[test]
    fn test_person_match_requires_colon() {
        let line = "Ivan Petrov: 01.01.2025 – 02.01.2025 [Отпуск]";
        assert!(line_matches_person(line, "Ivan Petrov"));
        assert!(!line_matches_person(line, "Ivan"));
        assert!(!line_matches_person(line, "Ivan Petrov "));
    }
}
