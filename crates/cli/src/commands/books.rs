use std::process;

use serde::Serialize;
use verseref_core::{BookCategories, Testament};

use crate::config::Settings;
use crate::{print_json, report_error, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookRow<'a> {
    id: &'a str,
    name: &'a str,
    testament: Option<Testament>,
    category: Option<&'a str>,
}

pub(crate) fn cmd_books(settings: &Settings, output: OutputFormat, quiet: bool) {
    let categories = match BookCategories::embedded(&settings.books) {
        Ok(c) => Some(c),
        Err(e) => {
            // A custom table may use other names; list it without categories.
            tracing::warn!("book categories unavailable: {}", e);
            None
        }
    };

    let rows: Vec<BookRow> = settings
        .books
        .iter()
        .map(|book| {
            let category = categories.as_ref().and_then(|c| c.category_of(&book.id));
            BookRow {
                id: &book.id,
                name: &book.name,
                testament: category.map(|c| c.testament),
                category: category.map(|c| c.name.as_str()),
            }
        })
        .collect();

    if rows.is_empty() {
        report_error("book table is empty", "empty_book_table", output, quiet);
        process::exit(1);
    }

    match output {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            for row in &rows {
                println!(
                    "{:<4} {:<18} {}",
                    row.id,
                    row.name,
                    row.category.unwrap_or("")
                );
            }
            if !quiet {
                println!();
                println!("{} books", rows.len());
            }
        }
    }
}
