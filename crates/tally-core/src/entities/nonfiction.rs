use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Book;
use crate::outcome::Rejection;
use crate::traits::{Describe, Readable};

/// A note pinned to a page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Note {
    pub page: u32,
    pub text: String,
}

/// A non-fiction book with a subject, an optional index, and page notes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NonFiction {
    book: Book,
    subject: String,
    has_index: bool,
    notes: Vec<Note>,
}

impl NonFiction {
    /// A non-fiction title. Books have an index unless told otherwise.
    pub fn new(book: Book, subject: impl Into<String>) -> Self {
        Self {
            book,
            subject: subject.into(),
            has_index: true,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn without_index(mut self) -> Self {
        self.has_index = false;
        self
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub const fn has_index(&self) -> bool {
        self.has_index
    }

    /// Notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Attach a note to `page`. Pages outside `1..=pages` are refused, not clamped.
    pub fn add_note(&mut self, page: u32, text: impl Into<String>) -> Result<&Note, Rejection> {
        let pages = self.book.pages();
        if !(1..=pages).contains(&page) {
            tracing::debug!(title = %self.book.title(), page, pages, "note rejected");
            return Err(Rejection::PageOutOfRange { page, pages });
        }
        self.notes.push(Note {
            page,
            text: text.into(),
        });
        Ok(&self.notes[self.notes.len() - 1])
    }
}

impl Describe for NonFiction {
    fn describe(&self) -> String {
        let index = if self.has_index {
            "with index"
        } else {
            "without index"
        };
        format!(
            "Non-Fiction: {} - Subject: {} ({index})",
            self.book.describe(),
            self.subject
        )
    }
}

impl Readable for NonFiction {
    fn book(&self) -> &Book {
        &self.book
    }

    fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }
}

impl fmt::Display for NonFiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
