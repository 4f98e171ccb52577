/// A citation that could not be turned into a verse or passage id.
///
/// Every variant carries the input or sub-token that caused the failure so
/// callers can show it back to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// A leading digit was not followed by a space ("111", "1John 1:1").
    #[error("Book number must be a single digit followed by a space: \"{reference}\"")]
    MissingBookNumberSeparator { reference: String },

    /// A leading digit outside the numbered-book set {1, 2, 3}.
    #[error("Invalid book number \"{number}\"")]
    InvalidBookNumber { number: char },

    /// No alphabetic run where the book name should start.
    #[error("Failed to parse book name out of the verse reference \"{reference}\"")]
    BookNameNotFound { reference: String },

    /// The book name is not followed by exactly one space.
    #[error(
        "Must include a single space to separate the book name from the chapter: \"{reference}\""
    )]
    MissingBookChapterSeparator { reference: String },

    /// The chapter/verse segment has zero or several colons.
    #[error(
        "Must include a single colon character to separate the chapter from the verse: \"{segment}\""
    )]
    InvalidColonCount { segment: String },

    #[error("Chapter must be a number: \"{chapter}\"")]
    InvalidChapter { chapter: String },

    /// Either side of a verse range is not a number, or the range runs backwards.
    #[error("Verse must be a number: \"{verse}\"")]
    InvalidVerse { verse: String },

    /// The full book name has no entry in the book table.
    #[error("Failed to look up book name for \"{name}\"")]
    UnknownBookName { name: String },
}

impl ReferenceError {
    /// Stable snake-case tag for machine consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            ReferenceError::MissingBookNumberSeparator { .. } => "missing_book_number_separator",
            ReferenceError::InvalidBookNumber { .. } => "invalid_book_number",
            ReferenceError::BookNameNotFound { .. } => "book_name_not_found",
            ReferenceError::MissingBookChapterSeparator { .. } => "missing_book_chapter_separator",
            ReferenceError::InvalidColonCount { .. } => "invalid_colon_count",
            ReferenceError::InvalidChapter { .. } => "invalid_chapter",
            ReferenceError::InvalidVerse { .. } => "invalid_verse",
            ReferenceError::UnknownBookName { .. } => "unknown_book_name",
        }
    }
}

/// Failure to load a book table or category resource.
#[derive(Debug, thiserror::Error)]
pub enum BookTableError {
    #[error("could not read book table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse book table: {0}")]
    Json(#[from] serde_json::Error),

    /// A category lists a book name that is not in the table.
    #[error("category '{category}' names unknown book \"{name}\"")]
    UnknownCategoryBook { category: String, name: String },
}
