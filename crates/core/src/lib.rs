//! verseref-core: Bible citation parser and id formatter.
//!
//! Turns human-written citations ("2 Corinthians 5:17", "3 John 1:7-8",
//! "Song of Solomon 2:1") into the `BOOK.chapter.verse` identifiers used by
//! content-retrieval APIs. The pipeline is strictly linear:
//!
//! 1. [`parser::parse`] -- split the citation into a [`ParsedReference`]
//! 2. [`resolve::resolve_book_id`] -- map the full book name to a book id
//! 3. [`ids::to_verse_id`] / [`ids::to_passage_id`] -- format the id
//!
//! [`Citations`] runs all three against a borrowed [`BookTable`].
//! Every failure is a [`ReferenceError`] variant; nothing here logs.

pub mod books;
pub mod categories;
pub mod citations;
pub mod error;
pub mod ids;
pub mod parser;
pub mod reference;
pub mod resolve;

// ── Convenience re-exports ───────────────────────────────────────────

pub use books::{BookEntry, BookTable};
pub use categories::{BookCategories, Category, Testament};
pub use citations::Citations;
pub use error::{BookTableError, ReferenceError};
pub use ids::{PassageId, VerseId};
pub use parser::parse;
pub use reference::ParsedReference;
pub use resolve::resolve_book_id;
