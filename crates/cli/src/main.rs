mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Bible citation parser and verse id tool.
#[derive(Parser)]
#[command(name = "verseref", version, about = "Bible citation parser and verse id tool")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug events to stderr (VERSEREF_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to a verseref.toml (default: ./verseref.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Book table JSON to use instead of the bundled one
    #[arg(long, global = true)]
    books: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a citation into book, chapter and verses
    Parse {
        /// Citation, e.g. "3 John 1:7-8"
        reference: String,
    },

    /// Print the verse id for a citation (start verse of a range)
    VerseId {
        /// Citation, e.g. "Galatians 2:20"
        reference: String,
    },

    /// Print the passage id for a citation
    PassageId {
        /// Citation, e.g. "Psalm 23:1-6"
        reference: String,
    },

    /// List the book table with testament and category
    Books,

    /// Print the verse of the day from a reading plan
    Daily {
        /// RFC 3339 timestamp with offset, e.g. 2025-01-01T08:00:00+05:00
        timestamp: String,
        /// Reading plan JSON files, one per year (default: [plan] files from config)
        #[arg(long = "plan")]
        plans: Vec<PathBuf>,
    },

    /// Validate a reading plan file
    CheckPlan {
        /// Reading plan JSON file
        file: PathBuf,
        /// Longest passage allowed for one day
        #[arg(long)]
        max_verses: Option<u32>,
    },

    /// Count a reading plan's verses per month by testament and category
    Report {
        /// Reading plan JSON file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("VERSEREF_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (plan_flags, max_verses_flag) = match &cli.command {
        Commands::Daily { plans, .. } => (plans.clone(), None),
        Commands::CheckPlan { max_verses, .. } => (Vec::new(), *max_verses),
        _ => (Vec::new(), None),
    };
    let settings = match config::find_config(cli.config.as_deref()).and_then(|file| {
        Settings::resolve(file, cli.books.as_deref(), &plan_flags, max_verses_flag)
    }) {
        Ok(s) => s,
        Err(msg) => {
            report_error(&msg, "config", cli.output, cli.quiet);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Parse { reference } => {
            commands::reference::cmd_parse(&settings, &reference, cli.output, cli.quiet);
        }
        Commands::VerseId { reference } => {
            commands::reference::cmd_verse_id(&settings, &reference, cli.output, cli.quiet);
        }
        Commands::PassageId { reference } => {
            commands::reference::cmd_passage_id(&settings, &reference, cli.output, cli.quiet);
        }
        Commands::Books => {
            commands::books::cmd_books(&settings, cli.output, cli.quiet);
        }
        Commands::Daily { timestamp, .. } => {
            commands::plan::cmd_daily(&settings, &timestamp, cli.output, cli.quiet);
        }
        Commands::CheckPlan { file, .. } => {
            commands::plan::cmd_check_plan(&settings, &file, cli.output, cli.quiet);
        }
        Commands::Report { file } => {
            commands::plan::cmd_report(&settings, &file, cli.output, cli.quiet);
        }
    }
}

/// Print an error to stderr in the selected format.
pub(crate) fn report_error(msg: &str, kind: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", msg),
        OutputFormat::Json => {
            let value = serde_json::json!({ "error": msg, "kind": kind });
            eprintln!("{}", value);
        }
    }
}

/// Print a serializable value as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
    println!("{}", pretty);
}
