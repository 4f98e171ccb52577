//! `verseref.toml` settings.
//!
//! # Example
//!
//! ```toml
//! [books]
//! path = "data/book-list.json"
//!
//! [plan]
//! files = ["plans/2025.json", "plans/2026.json"]
//! max_verses = 4
//! ```
//!
//! Command-line flags win over the file; the file wins over built-in defaults.
//! Relative paths in the file are resolved against the file's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use verseref_core::BookTable;
use verseref_plan::DEFAULT_MAX_VERSES;

/// Looked up in the working directory when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "verseref.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub(crate) books: BooksSection,
    #[serde(default)]
    pub(crate) plan: PlanSection,
}

/// `[books]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BooksSection {
    /// Book table in `{"data": [{"id", "name"}]}` form; the bundled table when absent.
    pub(crate) path: Option<PathBuf>,
}

/// `[plan]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PlanSection {
    #[serde(default)]
    pub(crate) files: Vec<PathBuf>,
    pub(crate) max_verses: Option<u32>,
}

/// Read and parse a config file, resolving its relative paths.
pub(crate) fn read_config(path: &Path) -> Result<ConfigFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    let mut config: ConfigFile = toml::from_str(&content)
        .map_err(|e| format!("could not parse '{}': {}", path.display(), e))?;

    let base = path.parent().unwrap_or(Path::new(""));
    if let Some(books) = config.books.path.take() {
        config.books.path = Some(base.join(books));
    }
    config.plan.files = config.plan.files.iter().map(|f| base.join(f)).collect();
    Ok(config)
}

/// Explicit `--config` must exist; the default file is optional.
pub(crate) fn find_config(explicit: Option<&Path>) -> Result<ConfigFile, String> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                read_config(default)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Effective settings after merging flags over the config file.
#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) books: BookTable,
    pub(crate) plan_files: Vec<PathBuf>,
    pub(crate) max_verses: u32,
}

impl Settings {
    pub(crate) fn resolve(
        config: ConfigFile,
        books_flag: Option<&Path>,
        plan_flags: &[PathBuf],
        max_verses_flag: Option<u32>,
    ) -> Result<Self, String> {
        let books_path = books_flag.map(Path::to_path_buf).or(config.books.path);
        let books = match &books_path {
            Some(path) => BookTable::load(path),
            None => BookTable::embedded(),
        }
        .map_err(|e| e.to_string())?;
        let source = books_path
            .as_deref()
            .map_or_else(|| "embedded".to_string(), |p| p.display().to_string());
        tracing::debug!(%source, count = books.len(), "loaded book table");

        let plan_files = if plan_flags.is_empty() {
            config.plan.files
        } else {
            plan_flags.to_vec()
        };

        Ok(Settings {
            books,
            plan_files,
            max_verses: max_verses_flag
                .or(config.plan.max_verses)
                .unwrap_or(DEFAULT_MAX_VERSES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verseref.toml");
        fs::write(
            &path,
            "[books]\npath = \"books.json\"\n\n[plan]\nfiles = [\"2025.json\"]\nmax_verses = 6\n",
        )
        .unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.books.path, Some(dir.path().join("books.json")));
        assert_eq!(config.plan.files, vec![dir.path().join("2025.json")]);
        assert_eq!(config.plan.max_verses, Some(6));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verseref.toml");
        fs::write(&path, "[plan]\nmax_verse = 6\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.contains("could not parse"), "{}", err);
    }

    #[test]
    fn flags_override_config() {
        let config = ConfigFile {
            books: BooksSection::default(),
            plan: PlanSection {
                files: vec![PathBuf::from("from-config.json")],
                max_verses: Some(6),
            },
        };
        let settings = Settings::resolve(
            config,
            None,
            &[PathBuf::from("from-flag.json")],
            Some(2),
        )
        .unwrap();
        assert_eq!(settings.plan_files, vec![PathBuf::from("from-flag.json")]);
        assert_eq!(settings.max_verses, 2);
        assert_eq!(settings.books.len(), 66);
    }

    #[test]
    fn defaults_without_config() {
        let settings = Settings::resolve(ConfigFile::default(), None, &[], None).unwrap();
        assert!(settings.plan_files.is_empty());
        assert_eq!(settings.max_verses, DEFAULT_MAX_VERSES);
    }

    #[test]
    fn missing_book_table_is_an_error() {
        let err = Settings::resolve(
            ConfigFile::default(),
            Some(Path::new("/nonexistent/books.json")),
            &[],
            None,
        )
        .unwrap_err();
        assert!(err.contains("/nonexistent/books.json"));
    }
}
