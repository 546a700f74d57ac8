//! Book catalog domain module.
//!
//! This crate contains the book/author data model and the in-memory catalog
//! service, implemented as deterministic domain logic (no IO, no storage).

pub mod author;
pub mod book;
pub mod catalog;
pub mod config;
pub mod search;


pub use author::Author;
pub use book::{Book, BookBuilder, Isbn};
pub use catalog::{Catalog, Library};
pub use config::{CatalogConfig, ConfigError};
pub use search::{SearchCriteria, SearchMode};
