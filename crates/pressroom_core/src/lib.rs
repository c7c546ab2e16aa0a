//! In-memory press domain: authors, magazines, and the articles linking them.
//! This crate is the single source of truth for press-model invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{
    ValidationError, ARTICLE_TITLE_MAX_CHARS, ARTICLE_TITLE_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS,
    MAGAZINE_NAME_MIN_CHARS,
};
pub use repo::press_repo::{InMemoryPressRepository, PressRepository};
pub use service::press_service::PressService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
