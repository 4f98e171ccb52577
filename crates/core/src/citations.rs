//! Citation -> id pipeline: parse, resolve, format.
//!
//! Thin orchestrator over the three stages. It borrows the book table and
//! keeps no other state, so one `Citations` can serve any number of callers.

use crate::books::BookTable;
use crate::error::ReferenceError;
use crate::ids::{self, PassageId, VerseId};
use crate::parser;
use crate::reference::ParsedReference;
use crate::resolve;

#[derive(Debug, Clone, Copy)]
pub struct Citations<'t> {
    books: &'t BookTable,
}

impl<'t> Citations<'t> {
    pub fn new(books: &'t BookTable) -> Self {
        Citations { books }
    }

    pub fn parse(&self, reference: &str) -> Result<ParsedReference, ReferenceError> {
        parser::parse(reference)
    }

    /// Resolve the id of an already-parsed reference.
    pub fn book_id(&self, parsed: &ParsedReference) -> Result<&'t str, ReferenceError> {
        resolve::resolve_book_id(self.books, &parsed.full_book_name)
    }

    /// `"Galatians 2:20"` -> `GAL.2.20`. For a range, the start verse.
    pub fn verse_id(&self, reference: &str) -> Result<VerseId, ReferenceError> {
        let parsed = parser::parse(reference)?;
        let book_id = self.book_id(&parsed)?;
        Ok(ids::to_verse_id(book_id, &parsed))
    }

    /// `"Psalm 23:1-6"` -> `PSA.23.1-PSA.23.6`.
    pub fn passage_id(&self, reference: &str) -> Result<PassageId, ReferenceError> {
        let parsed = parser::parse(reference)?;
        let book_id = self.book_id(&parsed)?;
        Ok(ids::to_passage_id(book_id, &parsed))
    }
}
