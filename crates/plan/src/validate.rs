//! Reading plan checks: one entry per day, dates in order, every citation
//! resolvable, no duplicates, no over-long passages.
//!
//! All problems are collected; validation does not stop at the first issue.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use time::{util, Date};
use verseref_core::Citations;

use crate::plan::{long_date, ReadingPlan};

/// Longest passage a daily entry may cite.
pub const DEFAULT_MAX_VERSES: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanIssue {
    DuplicateVerse {
        verse: String,
        first_day: usize,
        day: usize,
    },
    WrongLength {
        year: i32,
        expected: u16,
        actual: usize,
    },
    /// `date` does not parse, or is not the date for its position.
    DateMismatch {
        day: usize,
        expected: String,
        actual: String,
    },
    FormattedDateMismatch {
        day: usize,
        expected: String,
        actual: String,
    },
    InvalidReference {
        day: usize,
        verse: String,
        message: String,
    },
    TooManyVerses {
        day: usize,
        verse: String,
        verse_count: u32,
        max: u32,
    },
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanIssue::DuplicateVerse {
                verse,
                first_day,
                day,
            } => write!(
                f,
                "day {}: duplicate verse \"{}\" (first used on day {})",
                day, verse, first_day
            ),
            PlanIssue::WrongLength {
                year,
                expected,
                actual,
            } => write!(f, "{} needs {} entries, found {}", year, expected, actual),
            PlanIssue::DateMismatch {
                day,
                expected,
                actual,
            } => write!(f, "day {}: date \"{}\", expected {}", day, actual, expected),
            PlanIssue::FormattedDateMismatch {
                day,
                expected,
                actual,
            } => write!(
                f,
                "day {}: formattedDate \"{}\", expected \"{}\"",
                day, actual, expected
            ),
            PlanIssue::InvalidReference {
                day,
                verse,
                message,
            } => write!(f, "day {}: invalid verse \"{}\": {}", day, verse, message),
            PlanIssue::TooManyVerses {
                day,
                verse,
                verse_count,
                max,
            } => write!(
                f,
                "day {}: \"{}\" spans {} verses (max {})",
                day, verse, verse_count, max
            ),
        }
    }
}

/// Check `plan` and return every issue found, in day order.
pub fn validate_plan(
    plan: &ReadingPlan,
    citations: &Citations<'_>,
    max_verses: u32,
) -> Vec<PlanIssue> {
    let mut issues = Vec::new();
    let year = plan.year();
    let entries = plan.entries();

    let expected = util::days_in_year(year);
    if entries.len() != usize::from(expected) {
        issues.push(PlanIssue::WrongLength {
            year,
            expected,
            actual: entries.len(),
        });
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, entry) in entries.iter().enumerate() {
        let day = index + 1;

        // Days past the end of the year are already covered by WrongLength.
        if let Some(expected_date) = u16::try_from(day)
            .ok()
            .and_then(|d| Date::from_ordinal_date(year, d).ok())
        {
            if entry.parsed_date().ok() != Some(expected_date) {
                issues.push(PlanIssue::DateMismatch {
                    day,
                    expected: expected_date.to_string(),
                    actual: entry.date.clone(),
                });
            }
            let expected_long = long_date(expected_date);
            if entry.formatted_date != expected_long {
                issues.push(PlanIssue::FormattedDateMismatch {
                    day,
                    expected: expected_long,
                    actual: entry.formatted_date.clone(),
                });
            }
        }

        if let Some(first_day) = seen.get(entry.verse.as_str()) {
            issues.push(PlanIssue::DuplicateVerse {
                verse: entry.verse.clone(),
                first_day: *first_day,
                day,
            });
        } else {
            seen.insert(&entry.verse, day);
        }

        let parsed = match citations.parse(&entry.verse) {
            Ok(parsed) => parsed,
            Err(e) => {
                issues.push(PlanIssue::InvalidReference {
                    day,
                    verse: entry.verse.clone(),
                    message: e.to_string(),
                });
                continue;
            }
        };
        if let Err(e) = citations.book_id(&parsed) {
            issues.push(PlanIssue::InvalidReference {
                day,
                verse: entry.verse.clone(),
                message: e.to_string(),
            });
        }
        if parsed.verse_count > max_verses {
            issues.push(PlanIssue::TooManyVerses {
                day,
                verse: entry.verse.clone(),
                verse_count: parsed.verse_count,
                max: max_verses,
            });
        }
    }

    tracing::debug!(year, issues = issues.len(), "validated reading plan");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::tests::entries;
    use verseref_core::BookTable;

    fn full_year(year: i32) -> Vec<String> {
        let days = util::days_in_year(year);
        (1..=days)
            .map(|d| format!("Psalm {}:{}", d % 150 + 1, d / 150 + 1))
            .collect()
    }

    fn check(plan: &ReadingPlan) -> Vec<PlanIssue> {
        let table = BookTable::embedded().unwrap();
        validate_plan(plan, &Citations::new(&table), DEFAULT_MAX_VERSES)
    }

    #[test]
    fn clean_leap_and_common_years() {
        for year in [2024, 2025] {
            let verses = full_year(year);
            let refs: Vec<&str> = verses.iter().map(String::as_str).collect();
            let plan = ReadingPlan::new(entries(year, &refs)).unwrap();
            assert_eq!(check(&plan), Vec::new(), "{}", year);
        }
    }

    #[test]
    fn short_plan_is_wrong_length() {
        let plan = ReadingPlan::new(entries(2024, &["Genesis 1:1"])).unwrap();
        assert_eq!(
            check(&plan),
            vec![PlanIssue::WrongLength {
                year: 2024,
                expected: 366,
                actual: 1
            }]
        );
    }

    #[test]
    fn reports_each_entry_problem() {
        let mut list = entries(
            2025,
            &[
                "Genesis 1:1",
                "Genesis 1:1",
                "2 Corthians 5:17",
                "Genesis 1:A",
                "Psalm 23:1-6",
            ],
        );
        list[1].formatted_date = "Jan 2".to_string();
        list[4].date = "2025-01-06".to_string();
        let plan = ReadingPlan::new(list).unwrap();
        let issues: Vec<_> = check(&plan)
            .into_iter()
            .filter(|i| !matches!(i, PlanIssue::WrongLength { .. }))
            .collect();

        assert_eq!(issues.len(), 6, "{:?}", issues);
        assert!(matches!(&issues[0], PlanIssue::FormattedDateMismatch { day: 2, .. }));
        assert!(matches!(
            &issues[1],
            PlanIssue::DuplicateVerse { first_day: 1, day: 2, .. }
        ));
        assert!(matches!(
            &issues[2],
            PlanIssue::InvalidReference { day: 3, message, .. } if message.contains("2 Corthians")
        ));
        assert!(matches!(&issues[3], PlanIssue::InvalidReference { day: 4, .. }));
        assert!(matches!(&issues[4], PlanIssue::DateMismatch { day: 5, .. }));
        assert!(matches!(
            &issues[5],
            PlanIssue::TooManyVerses { day: 5, verse_count: 6, max: 4, .. }
        ));
    }

    #[test]
    fn issues_serialize_with_kind_tag() {
        let issue = PlanIssue::TooManyVerses {
            day: 5,
            verse: "Psalm 23:1-6".to_string(),
            verse_count: 6,
            max: 4,
        };
        let v = serde_json::to_value(&issue).unwrap();
        assert_eq!(v["kind"], "too_many_verses");
        assert_eq!(v["verse_count"], 6);
    }

    #[test]
    fn issues_display_as_one_line() {
        let issue = PlanIssue::WrongLength {
            year: 2024,
            expected: 366,
            actual: 1,
        };
        assert_eq!(issue.to_string(), "2024 needs 366 entries, found 1");

        let issue = PlanIssue::TooManyVerses {
            day: 5,
            verse: "Psalm 23:1-6".to_string(),
            verse_count: 6,
            max: 4,
        };
        assert_eq!(issue.to_string(), "day 5: \"Psalm 23:1-6\" spans 6 verses (max 4)");
    }
}
