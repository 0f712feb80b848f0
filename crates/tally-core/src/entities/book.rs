use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::counter::BoundedCounter;
use crate::errors::CoreError;
use crate::outcome::{Advance, Rejection};
use crate::traits::{Describe, Readable};

/// A book with reading progress and bookmarks.
///
/// The page count is the ceiling of `progress`; it is fixed at construction.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    publish_year: i32,
    progress: BoundedCounter,
    bookmarks: Vec<u32>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        publish_year: i32,
    ) -> Result<Self, CoreError> {
        let title = title.into();
        check_pages(&title, pages)?;
        Ok(Self {
            title,
            author: author.into(),
            publish_year,
            progress: BoundedCounter::new(pages),
            bookmarks: Vec::new(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn publish_year(&self) -> i32 {
        self.publish_year
    }

    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.progress.max()
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.progress.value()
    }

    /// Bookmarked pages in the order they were taken.
    #[must_use]
    pub fn bookmarks(&self) -> &[u32] {
        &self.bookmarks
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.progress.is_at_limit()
    }

    /// Read `pages` more pages, stopping at the last page.
    pub fn read(&mut self, pages: i64) -> Advance {
        let outcome = self.progress.advance(pages);
        tracing::debug!(title = %self.title, requested = pages, ?outcome, "read");
        outcome
    }

    /// Bookmark the current page. Fails before anything has been read.
    pub fn bookmark(&mut self) -> Result<u32, Rejection> {
        if self.progress.is_zero() {
            tracing::debug!(title = %self.title, "bookmark rejected: nothing read");
            return Err(Rejection::NothingRead);
        }
        let page = self.progress.value();
        self.bookmarks.push(page);
        Ok(page)
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress.percent()
    }
}

impl Describe for Book {
    fn describe(&self) -> String {
        format!(
            "'{}' by {} ({}), {} pages",
            self.title,
            self.author,
            self.publish_year,
            self.pages()
        )
    }
}

impl Readable for Book {
    fn book(&self) -> &Book {
        self
    }

    fn book_mut(&mut self) -> &mut Book {
        self
    }
}

fn check_pages(title: &str, pages: u32) -> Result<(), CoreError> {
    if pages == 0 {
        return Err(CoreError::Validation(format!(
            "book '{title}' must have at least one page"
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawBook {
    title: String,
    author: String,
    publish_year: i32,
    progress: BoundedCounter,
    bookmarks: Vec<u32>,
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBook::deserialize(deserializer)?;
        let pages = raw.progress.max();
        check_pages(&raw.title, pages).map_err(serde::de::Error::custom)?;
        if let Some(page) = raw.bookmarks.iter().find(|page| **page == 0 || **page > pages) {
            return Err(serde::de::Error::custom(format!(
                "bookmark {page} is outside 1..={pages}"
            )));
        }
        Ok(Self {
            title: raw.title,
            author: raw.author,
            publish_year: raw.publish_year,
            progress: raw.progress,
            bookmarks: raw.bookmarks,
        })
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
