use std::path::Path;
use std::process;

use verseref_core::{BookCategories, Citations};
use verseref_plan::{monthly_report, validate_plan, PlanCatalog, PlanError, ReadingPlan};

use crate::config::Settings;
use crate::{print_json, report_error, OutputFormat};

fn fail(e: &PlanError, output: OutputFormat, quiet: bool) -> ! {
    report_error(&e.to_string(), e.kind(), output, quiet);
    process::exit(1);
}

fn load_plan(file: &Path, output: OutputFormat, quiet: bool) -> ReadingPlan {
    match ReadingPlan::load(file) {
        Ok(plan) => plan,
        Err(e) => fail(&e, output, quiet),
    }
}

pub(crate) fn cmd_daily(settings: &Settings, timestamp: &str, output: OutputFormat, quiet: bool) {
    if settings.plan_files.is_empty() {
        report_error(
            "no reading plans given; pass --plan or set [plan] files in verseref.toml",
            "config",
            output,
            quiet,
        );
        process::exit(1);
    }
    let catalog = match PlanCatalog::load_all(&settings.plan_files) {
        Ok(c) => c,
        Err(e) => fail(&e, output, quiet),
    };

    match catalog.verse_of_the_day(timestamp) {
        Ok(daily) => match output {
            OutputFormat::Json => print_json(&daily),
            OutputFormat::Text => {
                println!("{}", daily.verse_reference);
                if !quiet {
                    println!("day {} ({})", daily.day_of_the_year, daily.formatted_date);
                }
            }
        },
        Err(e) => fail(&e, output, quiet),
    }
}

pub(crate) fn cmd_check_plan(settings: &Settings, file: &Path, output: OutputFormat, quiet: bool) {
    let plan = load_plan(file, output, quiet);
    let citations = Citations::new(&settings.books);
    let issues = validate_plan(&plan, &citations, settings.max_verses);

    match output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "file": file.display().to_string(),
            "year": plan.year(),
            "entries": plan.entries().len(),
            "valid": issues.is_empty(),
            "issues": issues,
        })),
        OutputFormat::Text => {
            for issue in &issues {
                println!("{}", issue);
            }
            if !quiet {
                if issues.is_empty() {
                    println!(
                        "{}: {} entries for {}, no issues",
                        file.display(),
                        plan.entries().len(),
                        plan.year()
                    );
                } else {
                    println!("{}: {} issue(s)", file.display(), issues.len());
                }
            }
        }
    }

    if !issues.is_empty() {
        process::exit(1);
    }
}

pub(crate) fn cmd_report(settings: &Settings, file: &Path, output: OutputFormat, quiet: bool) {
    let plan = load_plan(file, output, quiet);
    let categories = match BookCategories::embedded(&settings.books) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e.to_string(), "book_table", output, quiet);
            process::exit(1);
        }
    };
    let citations = Citations::new(&settings.books);

    let months = match monthly_report(&plan, &citations, &categories) {
        Ok(m) => m,
        Err(e) => fail(&e, output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&months),
        OutputFormat::Text => {
            for month in &months {
                println!(
                    "{}: {} Old Testament, {} New Testament",
                    month.month_name, month.old_testament_count, month.new_testament_count
                );
                for c in month
                    .old_testament
                    .iter()
                    .chain(&month.new_testament)
                    .filter(|c| c.count > 0)
                {
                    println!("  {:<18} {}", c.category_name, c.count);
                }
            }
        }
    }
}
