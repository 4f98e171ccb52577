use std::process;

use verseref_core::{Citations, ReferenceError};

use crate::config::Settings;
use crate::{print_json, report_error, OutputFormat};

fn fail(e: &ReferenceError, output: OutputFormat, quiet: bool) -> ! {
    report_error(&e.to_string(), e.kind(), output, quiet);
    process::exit(1);
}

pub(crate) fn cmd_parse(settings: &Settings, reference: &str, output: OutputFormat, quiet: bool) {
    let citations = Citations::new(&settings.books);
    let parsed = match citations.parse(reference) {
        Ok(p) => p,
        Err(e) => fail(&e, output, quiet),
    };
    // Lookup failures are reported but do not fail the parse.
    let book_id = citations.book_id(&parsed).ok();

    match output {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&parsed).unwrap_or_default();
            value["bookId"] = serde_json::json!(book_id);
            print_json(&value);
        }
        OutputFormat::Text => {
            println!("book:     {}", parsed.full_book_name);
            println!("book id:  {}", book_id.unwrap_or("(unknown)"));
            println!("chapter:  {}", parsed.chapter);
            if parsed.is_single_verse() {
                println!("verse:    {}", parsed.verse_start);
            } else {
                println!(
                    "verses:   {}-{} ({} verses)",
                    parsed.verse_start, parsed.verse_end, parsed.verse_count
                );
            }
        }
    }
}

pub(crate) fn cmd_verse_id(
    settings: &Settings,
    reference: &str,
    output: OutputFormat,
    quiet: bool,
) {
    match Citations::new(&settings.books).verse_id(reference) {
        Ok(id) => match output {
            OutputFormat::Json => print_json(&serde_json::json!({
                "reference": reference,
                "verseId": id,
            })),
            OutputFormat::Text => println!("{}", id),
        },
        Err(e) => fail(&e, output, quiet),
    }
}

pub(crate) fn cmd_passage_id(
    settings: &Settings,
    reference: &str,
    output: OutputFormat,
    quiet: bool,
) {
    match Citations::new(&settings.books).passage_id(reference) {
        Ok(id) => match output {
            OutputFormat::Json => print_json(&serde_json::json!({
                "reference": reference,
                "passageId": id,
            })),
            OutputFormat::Text => println!("{}", id),
        },
        Err(e) => fail(&e, output, quiet),
    }
}
