//! Press registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the append-only store of authors, magazines, and articles.
//! - Enforce cross-reference integrity: a published article always points
//!   at a registered author and magazine.
//!
//! # Invariants
//! - Write paths validate before appending; a rejected write leaves the
//!   registry and every stored entity unchanged.
//! - Slices returned by `authors()`/`magazines()`/`articles()` are in
//!   insertion (registry) order.

use log::{debug, warn};

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;

/// Registry interface for press entities.
///
/// An explicit store rather than process-global state, so every test and
/// host session can hold its own fresh, empty registry.
pub trait PressRepository {
    /// Validates and appends an author, returning its stable ID.
    fn register_author(&mut self, author: Author) -> Result<AuthorId, ValidationError>;

    /// Validates and appends a magazine, returning its stable ID.
    fn register_magazine(&mut self, magazine: Magazine) -> Result<MagazineId, ValidationError>;

    /// Validates and appends an article, returning its stable ID.
    ///
    /// Checks, in order: the author is registered, the magazine is
    /// registered, the article's own fields hold. Appending is the final
    /// step, so a failed publication never reaches the registry.
    fn publish_article(&mut self, article: Article) -> Result<ArticleId, ValidationError>;

    fn author(&self, id: AuthorId) -> Option<&Author>;
    fn magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn article(&self, id: ArticleId) -> Option<&Article>;

    /// All registered authors in insertion order.
    fn authors(&self) -> &[Author];
    /// All registered magazines in insertion order.
    fn magazines(&self) -> &[Magazine];
    /// All published articles in insertion order.
    fn articles(&self) -> &[Article];

    /// Rejects any rename of a registered author.
    ///
    /// Fails with `UnknownAuthor` for an unregistered ID, otherwise with
    /// `AuthorNameImmutable`.
    fn rename_author(&mut self, id: AuthorId, name: &str) -> Result<(), ValidationError>;

    /// Renames a registered magazine after re-validation.
    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> Result<(), ValidationError>;

    /// Recategorizes a registered magazine after re-validation.
    fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: &str,
    ) -> Result<(), ValidationError>;

    /// Retitles a published article after re-validation.
    fn retitle_article(&mut self, id: ArticleId, title: &str) -> Result<(), ValidationError>;

    /// Moves an article to another registered author.
    fn reassign_article_author(
        &mut self,
        id: ArticleId,
        author: AuthorId,
    ) -> Result<(), ValidationError>;

    /// Moves an article to another registered magazine.
    fn reassign_article_magazine(
        &mut self,
        id: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), ValidationError>;
}

/// In-memory, append-only press registry.
///
/// Every lookup and relational query is a linear scan; at this model's
/// scale no secondary index is kept.
#[derive(Debug, Default)]
pub struct InMemoryPressRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryPressRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.iter_mut().find(|author| author.id == id)
    }

    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.iter_mut().find(|magazine| magazine.id == id)
    }

    fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.iter_mut().find(|article| article.id == id)
    }

    fn check_publishable(&self, article: &Article) -> Result<(), ValidationError> {
        if self.author(article.author).is_none() {
            return Err(ValidationError::UnknownAuthor(article.author));
        }
        if self.magazine(article.magazine).is_none() {
            return Err(ValidationError::UnknownMagazine(article.magazine));
        }
        article.validate()
    }
}

impl PressRepository for InMemoryPressRepository {
    fn register_author(&mut self, author: Author) -> Result<AuthorId, ValidationError> {
        author.validate()?;
        let id = author.id;
        self.authors.push(author);
        debug!("event=author_registered module=repo status=ok id={id}");
        Ok(id)
    }

    fn register_magazine(&mut self, magazine: Magazine) -> Result<MagazineId, ValidationError> {
        magazine.validate()?;
        let id = magazine.id;
        self.magazines.push(magazine);
        debug!("event=magazine_registered module=repo status=ok id={id}");
        Ok(id)
    }

    fn publish_article(&mut self, article: Article) -> Result<ArticleId, ValidationError> {
        let result = self.check_publishable(&article);
        if let Err(err) = &result {
            warn!(
                "event=article_rejected module=repo status=error id={} reason={err}",
                article.id
            );
        }
        result?;

        let id = article.id;
        self.articles.push(article);
        debug!("event=article_published module=repo status=ok id={id}");
        Ok(id)
    }

    fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == id)
    }

    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|magazine| magazine.id == id)
    }

    fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn rename_author(&mut self, id: AuthorId, name: &str) -> Result<(), ValidationError> {
        let author = self
            .author_mut(id)
            .ok_or(ValidationError::UnknownAuthor(id))?;
        author.set_name(name)
    }

    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> Result<(), ValidationError> {
        let magazine = self
            .magazine_mut(id)
            .ok_or(ValidationError::UnknownMagazine(id))?;
        magazine.set_name(name)
    }

    fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: &str,
    ) -> Result<(), ValidationError> {
        let magazine = self
            .magazine_mut(id)
            .ok_or(ValidationError::UnknownMagazine(id))?;
        magazine.set_category(category)
    }

    fn retitle_article(&mut self, id: ArticleId, title: &str) -> Result<(), ValidationError> {
        let article = self
            .article_mut(id)
            .ok_or(ValidationError::UnknownArticle(id))?;
        article.set_title(title)
    }

    fn reassign_article_author(
        &mut self,
        id: ArticleId,
        author: AuthorId,
    ) -> Result<(), ValidationError> {
        if self.article(id).is_none() {
            return Err(ValidationError::UnknownArticle(id));
        }
        if self.author(author).is_none() {
            return Err(ValidationError::UnknownAuthor(author));
        }
        // Both checked above; the second lookup cannot fail.
        if let Some(article) = self.article_mut(id) {
            article.author = author;
        }
        Ok(())
    }

    fn reassign_article_magazine(
        &mut self,
        id: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), ValidationError> {
        if self.article(id).is_none() {
            return Err(ValidationError::UnknownArticle(id));
        }
        if self.magazine(magazine).is_none() {
            return Err(ValidationError::UnknownMagazine(magazine));
        }
        if let Some(article) = self.article_mut(id) {
            article.magazine = magazine;
        }
        Ok(())
    }
}
