//! verseref-plan: daily reading plans on top of verseref-core.
//!
//! A [`ReadingPlan`] is one year of daily citations. A [`PlanCatalog`] holds
//! plans by year and answers "which verse for this date"; [`validate_plan`]
//! checks a plan file; [`monthly_report`] breaks it down by testament and
//! book category.

pub mod daily;
pub mod error;
pub mod plan;
pub mod report;
pub mod validate;

pub use daily::DailyVerse;
pub use error::PlanError;
pub use plan::{PlanCatalog, PlanEntry, ReadingPlan};
pub use report::{monthly_report, CategoryCount, MonthReport};
pub use validate::{validate_plan, PlanIssue, DEFAULT_MAX_VERSES};
