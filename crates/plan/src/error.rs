use verseref_core::ReferenceError;

/// All errors that can be returned while loading or querying a reading plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The timestamp is not RFC 3339 with a UTC offset.
    #[error("Invalid date. Received: {input}")]
    InvalidDate { input: String },

    /// No plan is loaded for the requested year.
    #[error("Invalid year. Supported years are {supported}. Received: {year}")]
    UnsupportedYear { year: i32, supported: String },

    /// The plan for `year` has no entry at this day of the year.
    #[error("no verse for day {day} of {year}")]
    MissingDay { year: i32, day: u16 },

    #[error("reading plan has no entries")]
    EmptyPlan,

    /// An entry's `date` is not `YYYY-MM-DD`.
    #[error("invalid plan entry date \"{date}\"")]
    InvalidEntryDate { date: String },

    /// The verse resolved to a book that belongs to no category.
    #[error("Book name not found for verse: {verse}")]
    UnclassifiedBook { verse: String },

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("could not read reading plan '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse reading plan: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Stable snake-case tag for machine consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::InvalidDate { .. } => "invalid_date",
            PlanError::UnsupportedYear { .. } => "unsupported_year",
            PlanError::MissingDay { .. } => "missing_day",
            PlanError::EmptyPlan => "empty_plan",
            PlanError::InvalidEntryDate { .. } => "invalid_entry_date",
            PlanError::UnclassifiedBook { .. } => "unclassified_book",
            PlanError::Reference(e) => e.kind(),
            PlanError::Io { .. } => "io",
            PlanError::Json(_) => "json",
        }
    }
}
