//! Book resolution: full book name -> 3-letter book id.

use crate::books::BookTable;
use crate::error::ReferenceError;

/// The only alias: "Psalm" names the book the table calls "Psalms".
fn normalize_book_name(name: &str) -> &str {
    match name {
        "Psalm" => "Psalms",
        other => other,
    }
}

/// Look up the id for `full_book_name` ("2 Corinthians", "Psalm").
///
/// Matching is exact and case-sensitive; misspellings are reported, never corrected.
pub fn resolve_book_id<'t>(
    table: &'t BookTable,
    full_book_name: &str,
) -> Result<&'t str, ReferenceError> {
    table
        .find_by_name(normalize_book_name(full_book_name))
        .map(|book| book.id.as_str())
        .ok_or_else(|| ReferenceError::UnknownBookName {
            name: full_book_name.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::BookEntry;

    fn table() -> BookTable {
        BookTable::embedded().unwrap()
    }

    #[test]
    fn resolves_numbered_and_multi_word_names() {
        let t = table();
        assert_eq!(resolve_book_id(&t, "2 Corinthians").unwrap(), "2CO");
        assert_eq!(resolve_book_id(&t, "3 John").unwrap(), "3JN");
        assert_eq!(resolve_book_id(&t, "Song of Solomon").unwrap(), "SNG");
        assert_eq!(resolve_book_id(&t, "Galatians").unwrap(), "GAL");
    }

    #[test]
    fn psalm_is_an_alias_for_psalms() {
        let t = table();
        let alias = resolve_book_id(&t, "Psalm").unwrap();
        assert_eq!(alias, resolve_book_id(&t, "Psalms").unwrap());
        let others = t.iter().filter(|b| b.name != "Psalms");
        for book in others {
            assert_ne!(book.id, alias);
        }
    }

    #[test]
    fn misspelled_name_is_not_corrected() {
        let t = table();
        assert_eq!(
            resolve_book_id(&t, "2 Corthians"),
            Err(ReferenceError::UnknownBookName {
                name: "2 Corthians".to_string()
            })
        );
        assert!(resolve_book_id(&t, "psalms").is_err());
        assert!(resolve_book_id(&t, "Revelations").is_err());
    }

    #[test]
    fn first_match_wins_in_table_order() {
        let t = BookTable::new(vec![
            BookEntry {
                id: "AAA".to_string(),
                name: "Dup".to_string(),
            },
            BookEntry {
                id: "BBB".to_string(),
                name: "Dup".to_string(),
            },
        ]);
        assert_eq!(resolve_book_id(&t, "Dup").unwrap(), "AAA");
    }
}
