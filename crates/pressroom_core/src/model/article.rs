//! Article entity: the join between one author and one magazine.
//!
//! # Responsibility
//! - Hold the author/magazine link that every relational query derives from.
//! - Re-validate the title on every assignment.
//!
//! # Invariants
//! - `title` stays within the 5..=50 character window at all times.
//! - `author`/`magazine` are typed IDs; cross-reference integrity against
//!   the registry is enforced by the repository at publication and
//!   reassignment time, not here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{validate_article_title, ValidationError};

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// One published article, linking exactly one author and one magazine.
///
/// An article does not own its author or magazine; both may be shared
/// across any number of articles and outlive all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stable global ID used for linking and identity-based deduplication.
    pub id: ArticleId,
    /// The author this article is attributed to. Reassignable.
    pub author: AuthorId,
    /// The magazine this article was published in. Reassignable.
    pub magazine: MagazineId,
    title: String,
}

impl Article {
    /// Creates a new article with a generated stable ID.
    ///
    /// # Errors
    /// - `ArticleTitleLength` when `title` is outside 5..=50 characters.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author, magazine, title)
    }

    /// Creates an article with a caller-provided stable ID.
    pub fn with_id(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_article_title(&title)?;
        Ok(Self {
            id,
            author,
            magazine,
            title,
        })
    }

    /// Returns the article's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Retitles the article after re-validating the candidate value.
    ///
    /// Normal usage never retitles; the path exists so the constraint is
    /// enforced even where a host application does.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_article_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Re-checks every field invariant.
    ///
    /// Registry write paths call this so hand-built or deserialized values
    /// cannot bypass construction-time validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_article_title(&self.title)
    }
}
