//! # Record Helpers
//!
//! Pure operations on a team's stored lines: lookup by person, removal of a
//! previously selected line, and ordering for display.

use std::cmp::Ordering;

use crate::application::state::Selection;
use crate::domain::types::{LeaveRecord, line_matches_person};

/// Lines belonging to `person`, with their positions.
pub fn find_by_person(lines: &[String], person: &str) -> Vec<Selection> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line_matches_person(line, person))
        .map(|(index, line)| Selection {
            index,
            line: line.clone(),
        })
        .collect()
}

/// Removes exactly one line: the selected position if it still holds the same text,
/// otherwise the first equal line. Returns `None` if the line is gone.
pub fn remove_selected(lines: &[String], selected: &Selection) -> Option<Vec<String>> {
    let position = if lines.get(selected.index) == Some(&selected.line) {
        selected.index
    } else {
        lines.iter().position(|l| *l == selected.line)?
    };

    let mut remaining = lines.to_vec();
    remaining.remove(position);
    Some(remaining)
}

/// Sorted by start date for listing. Lines that do not parse keep file order at the end.
pub fn sort_by_start(lines: &[String]) -> Vec<String> {
    let mut keyed: Vec<_> = lines
        .iter()
        .map(|line| (LeaveRecord::parse(line).ok().map(|r| r.start_date), line))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, line)| line.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_by_person_keeps_positions() {
        let stored = lines(&[
            "Ivan: 01.01.2025 – 02.01.2025 [Отпуск]",
            "Anna: 01.01.2025 – 02.01.2025 [Отпуск]",
            "Ivan: 01.03.2025 – 02.03.2025 [Отгулы]",
        ]);
        let found = find_by_person(&stored, "Ivan");
        assert_eq!(found.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 2]);
        assert!(find_by_person(&stored, "Iva").is_empty());
    }

    #[test]
    fn test_remove_selected_leaves_duplicates() {
        let dup = "Ivan: 01.01.2025 – 02.01.2025 [Отпуск]";
        let stored = lines(&[dup, "Anna: 01.01.2025 – 02.01.2025 [Отпуск]", dup]);
        let selected = Selection {
            index: 2,
            line: dup.to_string(),
        };

        let remaining = remove_selected(&stored, &selected).unwrap();
        assert_eq!(remaining, lines(&[dup, "Anna: 01.01.2025 – 02.01.2025 [Отпуск]"]));
    }

    #[test]
    fn test_remove_selected_after_file_shifted() {
        let target = "Ivan: 01.01.2025 – 02.01.2025 [Отпуск]";
        let stored = lines(&["Anna: 05.05.2025 – 06.05.2025 [Отпуск]", target]);
        let selected = Selection {
            index: 0,
            line: target.to_string(),
        };
        assert_eq!(
            remove_selected(&stored, &selected).unwrap(),
            lines(&["Anna: 05.05.2025 – 06.05.2025 [Отпуск]"])
        );

        let gone = Selection {
            index: 0,
            line: "Nobody: 01.01.2025 – 01.01.2025 [Отпуск]".to_string(),
        };
        assert!(remove_selected(&stored, &gone).is_none());
    }

    #[test]
    fn test_sort_by_start_puts_unreadable_last() {
        let stored = lines(&[
            "broken line",
            "B: 10.02.2025 – 11.02.2025 [Отпуск]",
            "A: 01.01.2025 – 02.01.2025 [Отгулы]",
        ]);
        assert_eq!(
            sort_by_start(&stored),
            lines(&[
                "A: 01.01.2025 – 02.01.2025 [Отгулы]",
                "B: 10.02.2025 – 11.02.2025 [Отпуск]",
                "broken line",
            ])
        );
    }
}
