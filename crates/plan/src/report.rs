//! Monthly breakdown of a plan by testament and book category.

use serde::Serialize;
use time::Month;
use verseref_core::{BookCategories, Citations, Testament};

use crate::error::PlanError;
use crate::plan::{PlanEntry, ReadingPlan};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    pub month_name: String,
    pub old_testament_count: usize,
    pub new_testament_count: usize,
    /// Every Old Testament category, zero-filled, in resource order.
    pub old_testament: Vec<CategoryCount>,
    pub new_testament: Vec<CategoryCount>,
}

impl MonthReport {
    fn empty(month: Month, categories: &BookCategories) -> Self {
        let zeroed = |testament| -> Vec<CategoryCount> {
            categories
                .categories(testament)
                .map(|c| CategoryCount {
                    category_name: c.name.clone(),
                    count: 0,
                })
                .collect()
        };
        MonthReport {
            month_name: month.to_string(),
            old_testament_count: 0,
            new_testament_count: 0,
            old_testament: zeroed(Testament::OldTestament),
            new_testament: zeroed(Testament::NewTestament),
        }
    }

    fn count(&mut self, testament: Testament, category: &str) {
        let (total, counts) = match testament {
            Testament::OldTestament => (&mut self.old_testament_count, &mut self.old_testament),
            Testament::NewTestament => (&mut self.new_testament_count, &mut self.new_testament),
        };
        *total += 1;
        if let Some(c) = counts.iter_mut().find(|c| c.category_name == category) {
            c.count += 1;
        }
    }
}

/// Group `plan` by calendar month and count verses per testament and category.
///
/// Months come out in calendar order; months with no entries are left out.
/// Fails on the first entry whose date, citation or book cannot be resolved.
pub fn monthly_report(
    plan: &ReadingPlan,
    citations: &Citations<'_>,
    categories: &BookCategories,
) -> Result<Vec<MonthReport>, PlanError> {
    let mut months: Vec<(Month, MonthReport)> = Vec::new();

    for entry in plan.entries() {
        let month = entry.parsed_date()?.month();
        let (testament, category) = classify(entry, citations, categories)?;

        let index = match months.iter().position(|(m, _)| *m == month) {
            Some(index) => index,
            None => {
                months.push((month, MonthReport::empty(month, categories)));
                months.len() - 1
            }
        };
        months[index].1.count(testament, &category);
    }

    months.sort_by_key(|(month, _)| *month as u8);
    Ok(months.into_iter().map(|(_, report)| report).collect())
}

fn classify(
    entry: &PlanEntry,
    citations: &Citations<'_>,
    categories: &BookCategories,
) -> Result<(Testament, String), PlanError> {
    let parsed = citations.parse(&entry.verse)?;
    let book_id = citations.book_id(&parsed)?;
    let category = categories
        .category_of(book_id)
        .ok_or_else(|| PlanError::UnclassifiedBook {
            verse: entry.verse.clone(),
        })?;
    Ok((category.testament, category.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::tests::entries;
    use verseref_core::BookTable;

    fn report(verses: &[&str]) -> Result<Vec<MonthReport>, PlanError> {
        let table = BookTable::embedded().unwrap();
        let categories = BookCategories::embedded(&table).unwrap();
        let plan = ReadingPlan::new(entries(2025, verses)).unwrap();
        monthly_report(&plan, &Citations::new(&table), &categories)
    }

    #[test]
    fn counts_by_month_testament_and_category() {
        // 31 January days, then 2 in February.
        let mut verses = vec!["Genesis 1:1"; 30];
        verses.push("John 3:16");
        verses.push("Psalm 23:1");
        verses.push("Revelation 3:20");
        let months = report(&verses).unwrap();

        assert_eq!(months.len(), 2);
        let jan = &months[0];
        assert_eq!(jan.month_name, "January");
        assert_eq!(jan.old_testament_count, 30);
        assert_eq!(jan.new_testament_count, 1);
        assert_eq!(jan.old_testament[0].category_name, "Law");
        assert_eq!(jan.old_testament[0].count, 30);
        assert_eq!(jan.new_testament[0].category_name, "Gospels");
        assert_eq!(jan.new_testament[0].count, 1);

        let feb = &months[1];
        assert_eq!(feb.month_name, "February");
        assert_eq!((feb.old_testament_count, feb.new_testament_count), (1, 1));
        let poetry = feb
            .old_testament
            .iter()
            .find(|c| c.category_name == "Poetry")
            .unwrap();
        assert_eq!(poetry.count, 1);
        assert_eq!(feb.new_testament.last().unwrap().category_name, "Prophecy");
        assert_eq!(feb.new_testament.last().unwrap().count, 1);
    }

    #[test]
    fn every_category_is_listed_even_when_zero() {
        let months = report(&["Genesis 1:1"]).unwrap();
        assert_eq!(months[0].old_testament.len(), 5);
        assert_eq!(months[0].new_testament.len(), 5);
        assert!(months[0].new_testament.iter().all(|c| c.count == 0));
    }

    #[test]
    fn unknown_book_fails_the_report() {
        let err = report(&["Genesis 1:1", "2 Corthians 5:17"]).unwrap_err();
        assert_eq!(err.kind(), "unknown_book_name");
    }

    #[test]
    fn serializes_in_camel_case() {
        let months = report(&["Genesis 1:1"]).unwrap();
        let v = serde_json::to_value(&months[0]).unwrap();
        assert_eq!(v["monthName"], "January");
        assert_eq!(v["oldTestamentCount"], 1);
        assert_eq!(v["oldTestament"][0]["categoryName"], "Law");
    }
}
