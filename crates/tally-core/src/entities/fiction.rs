use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Book;
use crate::traits::{Describe, Readable};

/// A work of fiction: a book with a genre and a cast of characters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Fiction {
    book: Book,
    genre: String,
    characters: Vec<String>,
}

impl Fiction {
    /// A fiction title with an empty character list of its own.
    pub fn new(book: Book, genre: impl Into<String>) -> Self {
        Self {
            book,
            genre: genre.into(),
            characters: Vec::new(),
        }
    }

    /// Seed the character list.
    #[must_use]
    pub fn with_characters<I, S>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters.extend(characters.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    #[must_use]
    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    /// Append a character. Duplicates are kept.
    pub fn add_character(&mut self, character: impl Into<String>) -> &str {
        self.characters.push(character.into());
        self.characters.last().map_or("", String::as_str)
    }
}

impl Describe for Fiction {
    fn describe(&self) -> String {
        format!("Fiction: {} - Genre: {}", self.book.describe(), self.genre)
    }
}

impl Readable for Fiction {
    fn book(&self) -> &Book {
        &self.book
    }

    fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }
}

impl fmt::Display for Fiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
