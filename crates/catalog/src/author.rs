use serde::{Deserialize, Serialize};

use libris_core::{DomainError, DomainResult, ValueObject, require_text};

/// Value object: Author.
///
/// Equality and hashing use the `(first_name, last_name)` pair, case-sensitive.
/// Fields can be reassigned individually, but never to an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    first_name: String,
    last_name: String,
}

/// Unvalidated wire shape; absent names deserialize to `None`.
#[derive(Debug, Deserialize)]
struct AuthorRecord {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = DomainError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        Self::from_parts(record.first_name, record.last_name)
    }
}

impl ValueObject for Author {}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> DomainResult<Self> {
        Self::from_parts(Some(first_name.into()), Some(last_name.into()))
    }

    /// Build from possibly-absent parts (absent -> `NullValue`, empty -> `EmptyValue`).
    pub fn from_parts(first_name: Option<String>, last_name: Option<String>) -> DomainResult<Self> {
        Ok(Self {
            first_name: require_text("first_name", first_name)?,
            last_name: require_text("last_name", last_name)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> DomainResult<()> {
        self.first_name = require_text("first_name", Some(first_name.into()))?;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> DomainResult<()> {
        self.last_name = require_text("last_name", Some(last_name.into()))?;
        Ok(())
    }
}

impl core::fmt::Display for Author {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Author [first_name={}, last_name={}]",
            self.first_name, self.last_name
        )
    }
}
