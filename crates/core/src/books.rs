//! The canonical book table: 66 `{id, name}` records in canon order.
//!
//! A [`BookTable`] is built once and then only read. Callers hold it by value
//! or share it by reference; nothing in this crate mutates it after
//! construction. Uniqueness and completeness of user-supplied tables are not
//! checked -- a malformed table is a data problem, not a parse problem.

use crate::error::BookTableError;
use serde::{Deserialize, Serialize};
use std::path::Path;

static BOOK_LIST_JSON: &str = include_str!("../data/book-list.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Three-character uppercase code, e.g. "GEN", "2CO".
    pub id: String,
    /// Canonical English name, e.g. "2 Corinthians".
    pub name: String,
}

/// On-disk shape: `{"data": [{"id": ..., "name": ...}, ...]}`.
/// Additional per-book fields are ignored.
#[derive(Deserialize)]
struct BookListFile {
    data: Vec<BookEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTable {
    books: Vec<BookEntry>,
}

impl BookTable {
    pub fn new(books: Vec<BookEntry>) -> Self {
        BookTable { books }
    }

    /// The bundled 66-book table.
    pub fn embedded() -> Result<Self, BookTableError> {
        Self::from_json(BOOK_LIST_JSON)
    }

    pub fn from_json(src: &str) -> Result<Self, BookTableError> {
        let file: BookListFile = serde_json::from_str(src)?;
        Ok(BookTable::new(file.data))
    }

    /// Read a table in the `{"data": [...]}` format from `path`.
    pub fn load(path: &Path) -> Result<Self, BookTableError> {
        let src = std::fs::read_to_string(path).map_err(|source| BookTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&src)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookEntry> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First entry whose name equals `name` exactly, scanning in table order.
    pub fn find_by_name(&self, name: &str) -> Option<&BookEntry> {
        self.books.iter().find(|b| b.name == name)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&BookEntry> {
        self.books.iter().find(|b| b.id == id)
    }
}
