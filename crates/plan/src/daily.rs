//! Verse of the day: pick a plan entry by calendar date.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::PlanError;
use crate::plan::PlanCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyVerse {
    pub verse_reference: String,
    /// 1-based.
    pub day_of_the_year: u16,
    /// e.g. "January 1, 2025 12:00 AM", in the caller's offset.
    pub formatted_date: String,
}

impl PlanCatalog {
    /// Select the entry for the calendar date of `timestamp`.
    ///
    /// `timestamp` is RFC 3339 with an offset ("2025-01-01T00:00:00+05:00").
    /// The date is taken in that offset, not in UTC, so a reader in UTC+5 at
    /// 00:30 gets the new day's verse.
    pub fn verse_of_the_day(&self, timestamp: &str) -> Result<DailyVerse, PlanError> {
        let moment =
            OffsetDateTime::parse(timestamp, &Rfc3339).map_err(|_| PlanError::InvalidDate {
                input: timestamp.to_owned(),
            })?;
        let year = moment.year();
        let plan = self.plan(year)?;

        let day = moment.ordinal();
        let entry = plan
            .entry_for_day(day)
            .ok_or(PlanError::MissingDay { year, day })?;
        tracing::debug!(year, day, verse = %entry.verse, "selected verse of the day");

        let fmt = format_description!(
            "[month repr:long] [day padding:none], [year] [hour repr:12 padding:none]:[minute] [period]"
        );
        let formatted_date = moment
            .format(fmt)
            .map_err(|_| PlanError::InvalidDate {
                input: timestamp.to_owned(),
            })?;

        Ok(DailyVerse {
            verse_reference: entry.verse.clone(),
            day_of_the_year: day,
            formatted_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::tests::entries;
    use crate::plan::ReadingPlan;

    fn catalog() -> PlanCatalog {
        let mut c = PlanCatalog::new();
        c.insert(
            ReadingPlan::new(entries(2025, &["Genesis 1:1", "Genesis 1:2", "Genesis 1:3"]))
                .unwrap(),
        );
        c
    }

    #[test]
    fn picks_entry_by_day_of_year() {
        let c = catalog();
        assert_eq!(
            c.verse_of_the_day("2025-01-01T00:00:00+05:00").unwrap(),
            DailyVerse {
                verse_reference: "Genesis 1:1".to_string(),
                day_of_the_year: 1,
                formatted_date: "January 1, 2025 12:00 AM".to_string(),
            }
        );
        let v = c.verse_of_the_day("2025-01-03T00:00:00+05:00").unwrap();
        assert_eq!(v.verse_reference, "Genesis 1:3");
        assert_eq!(v.day_of_the_year, 3);
        assert_eq!(v.formatted_date, "January 3, 2025 12:00 AM");
    }

    #[test]
    fn date_is_taken_in_the_callers_offset() {
        let c = catalog();
        // 2025-01-01T20:00Z, but already January 2 in UTC+5.
        let v = c.verse_of_the_day("2025-01-02T01:00:00+05:00").unwrap();
        assert_eq!(v.verse_reference, "Genesis 1:2");
        assert_eq!(v.formatted_date, "January 2, 2025 1:00 AM");
    }

    #[test]
    fn unsupported_years() {
        let c = catalog();
        let err = c.verse_of_the_day("2024-01-01T00:00:00+05:00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid year. Supported years are 2025. Received: 2024"
        );
        assert!(matches!(
            c.verse_of_the_day("2027-12-31T00:00:00+05:00"),
            Err(PlanError::UnsupportedYear { year: 2027, .. })
        ));
    }

    #[test]
    fn invalid_date() {
        let err = catalog().verse_of_the_day("some bad value").unwrap_err();
        assert!(err.to_string().starts_with("Invalid date"));
    }

    #[test]
    fn short_plan_reports_missing_day() {
        assert!(matches!(
            catalog().verse_of_the_day("2025-02-01T08:00:00Z"),
            Err(PlanError::MissingDay { year: 2025, day: 32 })
        ));
    }
}
