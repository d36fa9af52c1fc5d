//! Blog post entity.

use serde::{Deserialize, Serialize};

use super::fields::{FieldValidationError, required_text};
use super::{BlogId, PhotoUri};

/// Column width of `blogs.title`.
pub const TITLE_MAX_CHARS: usize = 250;
/// Column width of `blogs.author`.
pub const AUTHOR_MAX_CHARS: usize = 50;

/// Persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Primary key.
    pub id: BlogId,
    /// Headline; also names the cover object.
    pub title: String,
    /// Byline.
    pub author: String,
    /// Uploaded cover URL or the shared placeholder.
    pub cover_image_uri: PhotoUri,
    /// Post body.
    pub body: String,
}

/// Validated text fields of a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    author: String,
    body: String,
}

impl BlogDraft {
    /// Validate submitted blog text.
    ///
    /// # Errors
    /// Returns [`FieldValidationError`] when a field is blank or wider than
    /// its column.
    pub fn try_new(title: &str, author: &str, body: &str) -> Result<Self, FieldValidationError> {
        Ok(Self {
            title: required_text("title", title, Some(TITLE_MAX_CHARS))?,
            author: required_text("author", author, Some(AUTHOR_MAX_CHARS))?,
            body: required_text("body", body, None)?,
        })
    }

    /// Trimmed title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Trimmed body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Record handed to the repository when creating a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    /// Submitted text.
    pub draft: BlogDraft,
    /// Cover URI resolved before persistence.
    pub cover_image_uri: PhotoUri,
}

/// Overwrite of a blog post's text columns.
///
/// The cover is deliberately absent; it changes only through the photo
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogUpdate {
    /// Replacement title.
    pub title: String,
    /// Replacement author.
    pub author: String,
    /// Replacement body.
    pub body: String,
}

impl From<BlogDraft> for BlogUpdate {
    fn from(draft: BlogDraft) -> Self {
        let BlogDraft {
            title,
            author,
            body,
        } = draft;
        Self {
            title,
            author,
            body,
        }
    }
}
