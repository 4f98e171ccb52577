//! Testament and category grouping of the canon (Law, Gospels, ...).
//!
//! The resource lists books by name; names are resolved against a
//! [`BookTable`] once at load time and every later lookup goes by book id.

use crate::books::BookTable;
use crate::error::BookTableError;
use crate::resolve::resolve_book_id;
use serde::{Deserialize, Serialize};

static BOOK_CATEGORIES_JSON: &str = include_str!("../data/book-categories.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Testament {
    OldTestament,
    NewTestament,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub testament: Testament,
    pub book_ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryFile {
    old_testament: Vec<CategoryRecord>,
    new_testament: Vec<CategoryRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    category_name: String,
    book_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BookCategories {
    categories: Vec<Category>,
}

impl BookCategories {
    pub fn embedded(books: &BookTable) -> Result<Self, BookTableError> {
        Self::from_json(BOOK_CATEGORIES_JSON, books)
    }

    pub fn from_json(src: &str, books: &BookTable) -> Result<Self, BookTableError> {
        let file: CategoryFile = serde_json::from_str(src)?;
        let grouped = [
            (Testament::OldTestament, file.old_testament),
            (Testament::NewTestament, file.new_testament),
        ];

        let mut categories = Vec::new();
        for (testament, records) in grouped {
            for record in records {
                let book_ids = record
                    .book_names
                    .iter()
                    .map(|name| {
                        resolve_book_id(books, name)
                            .map(str::to_owned)
                            .map_err(|_| BookTableError::UnknownCategoryBook {
                                category: record.category_name.clone(),
                                name: name.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                categories.push(Category {
                    name: record.category_name,
                    testament,
                    book_ids,
                });
            }
        }
        Ok(BookCategories { categories })
    }

    /// Categories of one testament, in resource order.
    pub fn categories(&self, testament: Testament) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(move |c| c.testament == testament)
    }

    pub fn category_of(&self, book_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.book_ids.iter().any(|id| id == book_id))
    }

    pub fn testament_of(&self, book_id: &str) -> Option<Testament> {
        self.category_of(book_id).map(|c| c.testament)
    }
}
