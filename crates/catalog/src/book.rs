use serde::{Deserialize, Serialize};

use libris_core::{DomainError, DomainResult, Entity, require_text};

use crate::author::Author;

/// Book identifier. Always strictly positive; length/format is not checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Isbn(i64);

impl Isbn {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "isbn must be greater than zero (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Isbn {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Isbn> for i64 {
    fn from(value: Isbn) -> Self {
        value.0
    }
}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: Book.
///
/// Identity is the ISBN alone. Two books with the same ISBN are the same book
/// to the catalog, even when every other field differs, so `PartialEq` and
/// `Hash` look at `isbn` and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    title: String,
    isbn: Isbn,
    authors: Vec<Author>,
    publisher: String,
    edition: u32,
}

/// Unvalidated wire shape. `authors` may be missing or null.
#[derive(Debug, Deserialize)]
struct BookRecord {
    title: Option<String>,
    isbn: Option<i64>,
    #[serde(default)]
    authors: Option<Vec<Author>>,
    publisher: Option<String>,
    edition: Option<i64>,
}

impl TryFrom<BookRecord> for Book {
    type Error = DomainError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let mut builder = Book::builder();
        builder.title = record.title;
        builder.isbn = record.isbn;
        builder.authors = record.authors;
        builder.publisher = record.publisher;
        builder.edition = record.edition;
        builder.build()
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl core::hash::Hash for Book {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> Isbn {
        self.isbn
    }

    /// Authors in credited order; empty for works of unknown authorship.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn edition(&self) -> u32 {
        self.edition
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> DomainResult<()> {
        self.title = require_text("title", Some(title.into()))?;
        Ok(())
    }

    /// Changes the book's identity. A book held by a catalog can't be reached
    /// mutably, so this only applies to values the caller owns.
    pub fn set_isbn(&mut self, isbn: i64) -> DomainResult<()> {
        self.isbn = Isbn::new(isbn)?;
        Ok(())
    }

    /// No validation: `None` and an empty list both mean "unknown authorship".
    pub fn set_authors(&mut self, authors: Option<Vec<Author>>) {
        self.authors = authors.unwrap_or_default();
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) -> DomainResult<()> {
        self.publisher = require_text("publisher", Some(publisher.into()))?;
        Ok(())
    }

    pub fn set_edition(&mut self, edition: i64) -> DomainResult<()> {
        self.edition = validate_edition(edition)?;
        Ok(())
    }
}

fn validate_edition(edition: i64) -> DomainResult<u32> {
    if edition < 1 {
        return Err(DomainError::invalid_argument(format!(
            "edition must be 1 or greater (got {edition})"
        )));
    }
    u32::try_from(edition)
        .map_err(|_| DomainError::invalid_argument(format!("edition {edition} is out of range")))
}

impl core::fmt::Display for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Book [title={}, isbn={}, authors=[", self.title, self.isbn)?;
        for (i, author) in self.authors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{author}")?;
        }
        write!(
            f,
            "], publisher={}, edition={}]",
            self.publisher, self.edition
        )
    }
}

/// Collects possibly-absent fields and validates them all at once in [`build`].
///
/// A missing title or publisher is a `NullValue` error. A missing isbn or
/// edition is read as zero and rejected as an `InvalidArgument`.
///
/// [`build`]: BookBuilder::build
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    pub title: Option<String>,
    pub isbn: Option<i64>,
    pub authors: Option<Vec<Author>>,
    pub publisher: Option<String>,
    pub edition: Option<i64>,
}

impl BookBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn isbn(mut self, isbn: i64) -> Self {
        self.isbn = Some(isbn);
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.authors.get_or_insert_with(Vec::new).push(author);
        self
    }

    pub fn authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = Some(authors);
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn edition(mut self, edition: i64) -> Self {
        self.edition = Some(edition);
        self
    }

    pub fn build(self) -> DomainResult<Book> {
        Ok(Book {
            title: require_text("title", self.title)?,
            isbn: Isbn::new(self.isbn.unwrap_or(0))?,
            authors: self.authors.unwrap_or_default(),
            publisher: require_text("publisher", self.publisher)?,
            edition: validate_edition(self.edition.unwrap_or(0))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbit() -> Book {
        Book::builder()
            .title("The Hobbit")
            .isbn(9780547928227)
            .author(Author::new("J.R.R.", "Tolkien").unwrap())
            .publisher("Houghton Mifflin")
            .edition(1)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_produces_book_with_all_fields() {
        let book = hobbit();
        assert_eq!(book.title(), "The Hobbit");
        assert_eq!(book.isbn().get(), 9780547928227);
        assert_eq!(book.authors().len(), 1);
        assert_eq!(book.publisher(), "Houghton Mifflin");
        assert_eq!(book.edition(), 1);
    }

    #[test]
    fn builder_rejects_missing_title() {
        let err = Book::builder()
            .isbn(1)
            .publisher("P")
            .edition(1)
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::NullValue("title".to_string()));
    }

    #[test]
    fn builder_rejects_empty_publisher() {
        let err = Book::builder()
            .title("T")
            .isbn(1)
            .publisher("")
            .edition(1)
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::EmptyValue("publisher".to_string()));
    }

    #[test]
    fn builder_treats_missing_isbn_as_invalid() {
        let err = Book::builder()
            .title("T")
            .publisher("P")
            .edition(1)
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn book_without_authors_is_allowed() {
        let book = Book::builder()
            .title("Beowulf")
            .isbn(9780393320978)
            .publisher("Norton")
            .edition(1)
            .build()
            .unwrap();
        assert!(book.authors().is_empty());
    }

    #[test]
    fn set_isbn_rejects_zero_and_negative() {
        let mut book = hobbit();
        for bad in [0, -1, i64::MIN] {
            let err = book.set_isbn(bad).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
        assert_eq!(book.isbn().get(), 9780547928227);
    }

    #[test]
    fn set_edition_rejects_values_below_one() {
        let mut book = hobbit();
        let err = book.set_edition(0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(book.edition(), 1);

        book.set_edition(3).unwrap();
        assert_eq!(book.edition(), 3);
    }

    #[test]
    fn failed_title_update_keeps_old_title() {
        let mut book = hobbit();
        let err = book.set_title("").unwrap_err();
        assert_eq!(err, DomainError::EmptyValue("title".to_string()));
        assert_eq!(book.title(), "The Hobbit");

        book.set_title("There and Back Again").unwrap();
        assert_eq!(book.title(), "There and Back Again");
    }

    #[test]
    fn failed_publisher_update_keeps_old_publisher() {
        let mut book = hobbit();
        let err = book.set_publisher("").unwrap_err();
        assert_eq!(err, DomainError::EmptyValue("publisher".to_string()));
        assert_eq!(book.publisher(), "Houghton Mifflin");

        book.set_publisher("Allen & Unwin").unwrap();
        assert_eq!(book.publisher(), "Allen & Unwin");
    }

    #[test]
    fn set_authors_accepts_none_and_empty() {
        let mut book = hobbit();
        book.set_authors(None);
        assert!(book.authors().is_empty());

        book.set_authors(Some(vec![
            Author::new("A", "One").unwrap(),
            Author::new("B", "Two").unwrap(),
        ]));
        assert_eq!(book.authors()[1].last_name(), "Two");

        book.set_authors(Some(Vec::new()));
        assert!(book.authors().is_empty());
    }

    #[test]
    fn equality_ignores_everything_but_isbn() {
        let a = Book::builder()
            .title("A")
            .isbn(1)
            .publisher("P")
            .edition(1)
            .build()
            .unwrap();
        let b = Book::builder()
            .title("B")
            .isbn(1)
            .publisher("Q")
            .edition(2)
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert!(a.same_identity_as(&b));
    }

    #[test]
    fn display_includes_authors() {
        assert_eq!(
            hobbit().to_string(),
            "Book [title=The Hobbit, isbn=9780547928227, \
             authors=[Author [first_name=J.R.R., last_name=Tolkien]], \
             publisher=Houghton Mifflin, edition=1]"
        );
    }

    #[test]
    fn deserialize_runs_constructor_validation() {
        let book: Book = serde_json::from_str(
            r#"{"title":"Dune","isbn":9780441013593,"authors":null,"publisher":"Ace","edition":1}"#,
        )
        .unwrap();
        assert_eq!(book.title(), "Dune");
        assert!(book.authors().is_empty());

        let err = serde_json::from_str::<Book>(
            r#"{"title":"Dune","isbn":-5,"publisher":"Ace","edition":1}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("isbn must be greater than zero"));
    }

    #[test]
    fn serialize_emits_plain_isbn() {
        let json = serde_json::to_value(hobbit()).unwrap();
        assert_eq!(json["isbn"], 9780547928227_i64);
        assert_eq!(json["authors"][0]["last_name"], "Tolkien");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: set_isbn succeeds iff the value is strictly positive.
            #[test]
            fn set_isbn_accepts_exactly_positive_values(value in any::<i64>()) {
                let mut book = hobbit();
                let result = book.set_isbn(value);
                prop_assert_eq!(result.is_ok(), value > 0);
                if value > 0 {
                    prop_assert_eq!(book.isbn().get(), value);
                } else {
                    prop_assert_eq!(book.isbn().get(), 9780547928227);
                }
            }

            /// Property: any non-empty title/publisher is stored and returned verbatim.
            #[test]
            fn non_empty_text_round_trips_through_setters(
                title in ".{1,60}",
                publisher in ".{1,60}"
            ) {
                let mut book = hobbit();
                book.set_title(title.clone()).unwrap();
                book.set_publisher(publisher.clone()).unwrap();
                prop_assert_eq!(book.title(), title.as_str());
                prop_assert_eq!(book.publisher(), publisher.as_str());
            }

            /// Property: an empty title/publisher is rejected and leaves the field as it was.
            #[test]
            fn empty_text_leaves_fields_unchanged(
                title in ".{1,60}",
                publisher in ".{1,60}"
            ) {
                let mut book = hobbit();
                book.set_title(title.clone()).unwrap();
                book.set_publisher(publisher.clone()).unwrap();

                prop_assert_eq!(book.set_title(""), Err(DomainError::empty_value("title")));
                prop_assert_eq!(book.set_publisher(""), Err(DomainError::empty_value("publisher")));
                prop_assert_eq!(book.title(), title.as_str());
                prop_assert_eq!(book.publisher(), publisher.as_str());
            }

            /// Property: equality tracks the ISBN and nothing else.
            #[test]
            fn equality_iff_same_isbn(
                isbn_a in 1i64..1_000,
                isbn_b in 1i64..1_000,
                title_a in "[A-Za-z ]{1,30}",
                title_b in "[A-Za-z ]{1,30}"
            ) {
                let build = |isbn: i64, title: &str| {
                    Book::builder()
                        .title(title)
                        .isbn(isbn)
                        .publisher("P")
                        .edition(1)
                        .build()
                        .unwrap()
                };
                let a = build(isbn_a, &title_a);
                let b = build(isbn_b, &title_b);
                prop_assert_eq!(a == b, isbn_a == isbn_b);
            }
        }
    }
}
