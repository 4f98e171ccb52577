//! Structured form of a parsed citation.
//! No book lookup is done here -- that is the resolver's job.

use serde::{Deserialize, Serialize};

/// A citation split into its parts.
///
/// Built only by [`crate::parser::parse`], which guarantees
/// `verse_end >= verse_start` and therefore `verse_count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReference {
    /// Book name with its number prefix, e.g. "2 Corinthians". This is the lookup key.
    pub full_book_name: String,
    /// Book name without the number prefix, e.g. "Corinthians".
    pub book_name: String,
    /// The 1-3 prefix of numbered books.
    pub book_number: Option<u8>,
    pub chapter: u32,
    pub verse_start: u32,
    pub verse_end: u32,
    pub verse_count: u32,
}

impl ParsedReference {
    pub(crate) fn new(
        book_number: Option<u8>,
        book_name: String,
        chapter: u32,
        verse_start: u32,
        verse_end: u32,
    ) -> Self {
        let full_book_name = match book_number {
            Some(n) => format!("{} {}", n, book_name),
            None => book_name.clone(),
        };
        ParsedReference {
            full_book_name,
            book_name,
            book_number,
            chapter,
            verse_start,
            verse_end,
            verse_count: verse_end - verse_start + 1,
        }
    }

    pub fn is_single_verse(&self) -> bool {
        self.verse_count == 1
    }
}
