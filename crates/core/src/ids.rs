//! Identifier formatting: `BOOK.chapter.verse` and verse ranges.

use crate::reference::ParsedReference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical id of a single verse, e.g. `PSA.23.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerseId(String);

/// A single verse id, or `start-end` within one chapter, e.g. `PSA.23.1-PSA.23.6`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassageId(String);

impl VerseId {
    fn new(book_id: &str, chapter: u32, verse: u32) -> Self {
        VerseId(format!("{}.{}.{}", book_id, chapter, verse))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PassageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PassageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VerseId> for PassageId {
    fn from(id: VerseId) -> Self {
        PassageId(id.0)
    }
}

pub fn to_verse_id(book_id: &str, parsed: &ParsedReference) -> VerseId {
    VerseId::new(book_id, parsed.chapter, parsed.verse_start)
}

pub fn to_passage_id(book_id: &str, parsed: &ParsedReference) -> PassageId {
    let start = to_verse_id(book_id, parsed);
    if parsed.is_single_verse() {
        return start.into();
    }
    let end = VerseId::new(book_id, parsed.chapter, parsed.verse_end);
    PassageId(format!("{}-{}", start, end))
}
