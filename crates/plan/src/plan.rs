//! Reading plan files: one year of daily citations, in day order.
//!
//! File shape (one JSON array per year):
//!
//! ```json
//! [
//!   { "verse": "Genesis 1:1", "date": "2025-01-01", "formattedDate": "Wednesday, January 1, 2025" },
//!   ...
//! ]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::error::PlanError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub verse: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// e.g. "Wednesday, January 1, 2025".
    pub formatted_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlanEntry {
    pub fn parsed_date(&self) -> Result<Date, PlanError> {
        parse_entry_date(&self.date)
    }
}

pub(crate) fn parse_entry_date(date: &str) -> Result<Date, PlanError> {
    Date::parse(date, format_description!("[year]-[month]-[day]")).map_err(|_| {
        PlanError::InvalidEntryDate {
            date: date.to_owned(),
        }
    })
}

/// Long form used in plan files: "Wednesday, January 1, 2025".
pub(crate) fn long_date(date: Date) -> String {
    let fmt = format_description!("[weekday], [month repr:long] [day padding:none], [year]");
    date.format(fmt).unwrap_or_else(|_| date.to_string())
}

/// One year of entries. Index `i` is meant for day-of-year `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingPlan {
    year: i32,
    entries: Vec<PlanEntry>,
}

impl ReadingPlan {
    /// Build a plan; its year is the year of the first entry.
    pub fn new(entries: Vec<PlanEntry>) -> Result<Self, PlanError> {
        let first = entries.first().ok_or(PlanError::EmptyPlan)?;
        let year = first.parsed_date()?.year();
        Ok(ReadingPlan { year, entries })
    }

    pub fn from_json(src: &str) -> Result<Self, PlanError> {
        let entries: Vec<PlanEntry> = serde_json::from_str(src)?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let src = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let plan = Self::from_json(&src)?;
        tracing::debug!(
            path = %path.display(),
            year = plan.year,
            entries = plan.entries.len(),
            "loaded reading plan"
        );
        Ok(plan)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Entry for a 1-based day of the year.
    pub fn entry_for_day(&self, day: u16) -> Option<&PlanEntry> {
        let index = usize::from(day).checked_sub(1)?;
        self.entries.get(index)
    }
}

/// Plans keyed by year.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: BTreeMap<i32, ReadingPlan>,
}

impl PlanCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plan, replacing any earlier plan for the same year.
    pub fn insert(&mut self, plan: ReadingPlan) -> Option<ReadingPlan> {
        self.plans.insert(plan.year(), plan)
    }

    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Self, PlanError> {
        let mut catalog = Self::new();
        for path in paths {
            catalog.insert(ReadingPlan::load(path.as_ref())?);
        }
        Ok(catalog)
    }

    pub fn supported_years(&self) -> Vec<i32> {
        self.plans.keys().copied().collect()
    }

    pub fn plan(&self, year: i32) -> Result<&ReadingPlan, PlanError> {
        self.plans
            .get(&year)
            .ok_or_else(|| PlanError::UnsupportedYear {
                year,
                supported: self
                    .supported_years()
                    .iter()
                    .map(i32::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// The full list for `year`.
    pub fn verse_list(&self, year: i32) -> Result<&[PlanEntry], PlanError> {
        self.plan(year).map(ReadingPlan::entries)
    }
}
