//! Relational query service over the press registry.
//!
//! # Responsibility
//! - Answer author-side and magazine-side relationship queries.
//! - Compute aggregate answers (contributing authors, top publisher).
//!
//! # Invariants
//! - Every query derives its answer from a registry scan at call time;
//!   nothing is cached or materialized.
//! - Service APIs never bypass repository validation contracts.
//! - Distinctness in set-valued results is by entity id, never by value.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use crate::repo::press_repo::PressRepository;

/// An author must exceed this many articles in one magazine to count as a
/// contributing author.
const CONTRIBUTING_ARTICLE_THRESHOLD: usize = 2;

/// Use-case service wrapping a press registry.
pub struct PressService<R: PressRepository> {
    repo: R,
}

impl<R: PressRepository> PressService<R> {
    /// Creates a service using the provided registry implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying registry.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Creates and registers an author.
    pub fn create_author(&mut self, name: &str) -> Result<AuthorId, ValidationError> {
        let author = Author::new(name)?;
        self.repo.register_author(author)
    }

    /// Creates and registers a magazine.
    pub fn create_magazine(
        &mut self,
        name: &str,
        category: &str,
    ) -> Result<MagazineId, ValidationError> {
        let magazine = Magazine::new(name, category)?;
        self.repo.register_magazine(magazine)
    }

    /// Creates and publishes an article linking `author` and `magazine`.
    ///
    /// Violations are reported in order: unknown author, unknown magazine,
    /// invalid title. Any failure propagates unchanged and leaves the
    /// registry untouched.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: &str,
    ) -> Result<ArticleId, ValidationError> {
        if self.repo.author(author).is_none() {
            return Err(ValidationError::UnknownAuthor(author));
        }
        if self.repo.magazine(magazine).is_none() {
            return Err(ValidationError::UnknownMagazine(magazine));
        }
        let article = Article::new(author, magazine, title)?;
        self.repo.publish_article(article)
    }

    /// Looks up one author by id.
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.repo.author(id)
    }

    /// Looks up one magazine by id.
    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.repo.magazine(id)
    }

    /// Looks up one article by id.
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.repo.article(id)
    }

    /// Articles written by `author`, in registry order.
    ///
    /// An unregistered author has written nothing, so the result is empty.
    pub fn articles_by(&self, author: AuthorId) -> Vec<&Article> {
        self.repo
            .articles()
            .iter()
            .filter(|article| article.author == author)
            .collect()
    }

    /// Distinct magazines `author` has written for.
    ///
    /// Distinct by magazine id; ordered by first appearance among the
    /// author's articles (set semantics, order is not part of the contract).
    pub fn magazines_of(&self, author: AuthorId) -> Vec<&Magazine> {
        let mut seen = BTreeSet::new();
        let mut magazines = Vec::new();
        for article in self.articles_by(author) {
            if seen.insert(article.magazine) {
                if let Some(magazine) = self.repo.magazine(article.magazine) {
                    magazines.push(magazine);
                }
            }
        }
        magazines
    }

    /// Distinct categories across the magazines `author` has written for.
    ///
    /// `None` when the author has no articles at all.
    pub fn topic_areas(&self, author: AuthorId) -> Option<Vec<String>> {
        let magazines = self.magazines_of(author);
        if magazines.is_empty() {
            return None;
        }
        let mut seen = BTreeSet::new();
        let mut areas = Vec::new();
        for magazine in magazines {
            if seen.insert(magazine.category()) {
                areas.push(magazine.category().to_string());
            }
        }
        Some(areas)
    }

    /// Articles published in `magazine`, in registry order.
    pub fn articles_in(&self, magazine: MagazineId) -> Vec<&Article> {
        self.repo
            .articles()
            .iter()
            .filter(|article| article.magazine == magazine)
            .collect()
    }

    /// Distinct authors who have written for `magazine`.
    pub fn contributors(&self, magazine: MagazineId) -> Vec<&Author> {
        let mut seen = BTreeSet::new();
        let mut authors = Vec::new();
        for article in self.articles_in(magazine) {
            if seen.insert(article.author) {
                if let Some(author) = self.repo.author(article.author) {
                    authors.push(author);
                }
            }
        }
        authors
    }

    /// Titles of the articles published in `magazine`, in registry order.
    ///
    /// `None` when the magazine has no articles.
    pub fn article_titles(&self, magazine: MagazineId) -> Option<Vec<String>> {
        let titles: Vec<String> = self
            .articles_in(magazine)
            .iter()
            .map(|article| article.title().to_string())
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Authors with strictly more than two articles in `magazine`.
    ///
    /// `None` when no author qualifies, which callers can tell apart from a
    /// magazine with no articles via `articles_in`. Never `Some(vec![])`.
    pub fn contributing_authors(&self, magazine: MagazineId) -> Option<Vec<&Author>> {
        let mut counts: BTreeMap<AuthorId, usize> = BTreeMap::new();
        for article in self.articles_in(magazine) {
            *counts.entry(article.author).or_insert(0) += 1;
        }

        let mut seen = BTreeSet::new();
        let mut qualifying = Vec::new();
        for article in self.articles_in(magazine) {
            let count = counts.get(&article.author).copied().unwrap_or(0);
            if count > CONTRIBUTING_ARTICLE_THRESHOLD && seen.insert(article.author) {
                if let Some(author) = self.repo.author(article.author) {
                    qualifying.push(author);
                }
            }
        }

        if qualifying.is_empty() {
            None
        } else {
            Some(qualifying)
        }
    }

    /// The magazine with the most articles across the whole registry.
    ///
    /// Ties are broken deterministically: the first magazine to reach the
    /// maximum count in registry-scan order wins. `None` when no article
    /// has been published.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut counts: BTreeMap<MagazineId, usize> = BTreeMap::new();
        let mut best: Option<(MagazineId, usize)> = None;

        for article in self.repo.articles() {
            let count = counts.entry(article.magazine).or_insert(0);
            *count += 1;
            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ => best = Some((article.magazine, *count)),
            }
        }

        best.and_then(|(id, _)| self.repo.magazine(id))
    }

    /// Rejects any author rename; see `PressRepository::rename_author`.
    pub fn rename_author(&mut self, id: AuthorId, name: &str) -> Result<(), ValidationError> {
        self.repo.rename_author(id, name)
    }

    /// Renames a magazine after re-validation.
    pub fn rename_magazine(&mut self, id: MagazineId, name: &str) -> Result<(), ValidationError> {
        self.repo.rename_magazine(id, name)
    }

    /// Recategorizes a magazine after re-validation.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: &str,
    ) -> Result<(), ValidationError> {
        self.repo.recategorize_magazine(id, category)
    }

    /// Retitles an article after re-validation.
    pub fn retitle_article(&mut self, id: ArticleId, title: &str) -> Result<(), ValidationError> {
        self.repo.retitle_article(id, title)
    }

    /// Moves an article to another registered author.
    pub fn reassign_article_author(
        &mut self,
        id: ArticleId,
        author: AuthorId,
    ) -> Result<(), ValidationError> {
        self.repo.reassign_article_author(id, author)
    }

    /// Moves an article to another registered magazine.
    pub fn reassign_article_magazine(
        &mut self,
        id: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), ValidationError> {
        self.repo.reassign_article_magazine(id, magazine)
    }
}
