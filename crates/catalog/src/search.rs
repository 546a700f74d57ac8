//! Book search criteria and matching.

use libris_core::{DomainError, DomainResult};

use crate::author::Author;
use crate::book::Book;

/// How `find_books` applies the criteria it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Only the title criterion filters; author/isbn/publisher are accepted
    /// but ignored, and a query without a title matches nothing.
    #[default]
    TitleOnly,
    /// Every supplied criterion must match: author and isbn exactly, title and
    /// publisher as case-insensitive substrings.
    AllCriteria,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::TitleOnly => "title-only",
            SearchMode::AllCriteria => "all-criteria",
        }
    }
}

impl core::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SearchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title-only" => Ok(SearchMode::TitleOnly),
            "all-criteria" => Ok(SearchMode::AllCriteria),
            other => Err(DomainError::invalid_argument(format!(
                "unknown search mode: {other}"
            ))),
        }
    }
}

/// Optional search criteria. A negative `isbn` counts as unused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub author: Option<Author>,
    pub isbn: Option<i64>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn isbn(mut self, isbn: i64) -> Self {
        self.isbn = Some(isbn);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    fn used_isbn(&self) -> Option<i64> {
        self.isbn.filter(|isbn| *isbn >= 0)
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.used_isbn().is_none()
            && self.title.is_none()
            && self.publisher.is_none()
    }

    /// Fails with `InvalidArgument` when no criterion is usable.
    pub fn validate(&self) -> DomainResult<()> {
        if self.is_empty() {
            return Err(DomainError::invalid_argument(
                "at least one search criterion is required",
            ));
        }
        Ok(())
    }

    /// Whether `book` satisfies these criteria under `mode`.
    pub fn matches(&self, book: &Book, mode: SearchMode) -> bool {
        match mode {
            SearchMode::TitleOnly => self
                .title
                .as_deref()
                .is_some_and(|needle| contains_ignore_case(book.title(), needle)),
            SearchMode::AllCriteria => {
                self.author
                    .as_ref()
                    .is_none_or(|author| book.authors().contains(author))
                    && self.used_isbn().is_none_or(|isbn| book.isbn().get() == isbn)
                    && self
                        .title
                        .as_deref()
                        .is_none_or(|needle| contains_ignore_case(book.title(), needle))
                    && self
                        .publisher
                        .as_deref()
                        .is_none_or(|needle| contains_ignore_case(book.publisher(), needle))
            }
        }
    }
}

/// Substring match after lowercasing both sides and trimming the needle.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.trim().to_lowercase())
}
