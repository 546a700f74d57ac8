//! In-memory book catalog.

use std::collections::HashSet;

use libris_core::{DomainError, DomainResult};

use crate::book::{Book, Isbn};
use crate::config::CatalogConfig;
use crate::search::{SearchCriteria, SearchMode};

/// Catalog operations over a working set of books.
pub trait Library {
    /// Append `book`; fails with `Duplicate` if a book with its ISBN is present.
    fn add_book(&mut self, book: Book) -> DomainResult<()>;

    /// Remove and return the stored book equal to `book`. Missing books are a no-op.
    fn remove_book(&mut self, book: &Book) -> Option<Book>;

    /// Every book, in insertion order.
    fn list_all_books(&self) -> &[Book];

    /// Books matching `criteria`; fails with `InvalidArgument` when no criterion is usable.
    fn find_books(&self, criteria: &SearchCriteria) -> DomainResult<Vec<&Book>>;
}

/// Ordered collection of books, unique by ISBN.
///
/// Books are only handed out by shared reference, so the ISBN index can't
/// drift from the list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    isbns: HashSet<Isbn>,
    config: CatalogConfig,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn search_mode(&self) -> SearchMode {
        self.config.search_mode
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, isbn: Isbn) -> bool {
        self.isbns.contains(&isbn)
    }

    pub fn get(&self, isbn: Isbn) -> Option<&Book> {
        if !self.contains(isbn) {
            return None;
        }
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    /// Like [`Library::add_book`], but an absent book is a `NullValue` error.
    pub fn add_book_opt(&mut self, book: Option<Book>) -> DomainResult<()> {
        let book = book.ok_or_else(|| DomainError::null_value("book"))?;
        self.add_book(book)
    }

    /// Like [`Library::remove_book`]; an absent book is a no-op.
    pub fn remove_book_opt(&mut self, book: Option<&Book>) -> Option<Book> {
        book.and_then(|b| self.remove_book(b))
    }
}

impl Library for Catalog {
    fn add_book(&mut self, book: Book) -> DomainResult<()> {
        let isbn = book.isbn();
        if self.isbns.contains(&isbn) {
            tracing::warn!(isbn = isbn.get(), "rejected duplicate book");
            return Err(DomainError::duplicate(isbn.get()));
        }

        self.isbns.insert(isbn);
        self.books.push(book);
        tracing::debug!(isbn = isbn.get(), count = self.books.len(), "book added");
        Ok(())
    }

    fn remove_book(&mut self, book: &Book) -> Option<Book> {
        let isbn = book.isbn();
        if !self.isbns.contains(&isbn) {
            return None;
        }

        let pos = self.books.iter().position(|b| b.isbn() == isbn)?;
        let removed = self.books.remove(pos);
        self.isbns.remove(&isbn);
        tracing::debug!(isbn = isbn.get(), count = self.books.len(), "book removed");
        Some(removed)
    }

    fn list_all_books(&self) -> &[Book] {
        &self.books
    }

    fn find_books(&self, criteria: &SearchCriteria) -> DomainResult<Vec<&Book>> {
        criteria.validate()?;

        let mode = self.config.search_mode;
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| criteria.matches(book, mode))
            .collect();

        tracing::debug!(mode = %mode, matched = found.len(), "catalog search");
        Ok(found)
    }
}
