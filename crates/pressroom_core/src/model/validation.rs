//! Field validation rules and the single domain error kind.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::article::ArticleId;
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;

/// Minimum magazine name length in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length in characters.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum article title length in characters.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length in characters.
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Domain validation error.
///
/// Every rejected construction, setter call, or registry write surfaces one
/// of these variants to the immediate caller. There is no recovery or
/// suppression inside the model; callers may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyAuthorName,
    AuthorNameImmutable,
    MagazineNameLength { len: usize },
    EmptyMagazineCategory,
    ArticleTitleLength { len: usize },
    UnknownAuthor(AuthorId),
    UnknownMagazine(MagazineId),
    UnknownArticle(ArticleId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::AuthorNameImmutable => {
                write!(f, "author name is immutable after creation")
            }
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}-{MAGAZINE_NAME_MAX_CHARS} \
                 characters, got {len}"
            ),
            Self::EmptyMagazineCategory => write!(f, "magazine category must not be empty"),
            Self::ArticleTitleLength { len } => write!(
                f,
                "article title must be {ARTICLE_TITLE_MIN_CHARS}-{ARTICLE_TITLE_MAX_CHARS} \
                 characters, got {len}"
            ),
            Self::UnknownAuthor(id) => write!(f, "article author is not registered: {id}"),
            Self::UnknownMagazine(id) => write!(f, "article magazine is not registered: {id}"),
            Self::UnknownArticle(id) => write!(f, "article is not registered: {id}"),
        }
    }
}

impl Error for ValidationError {}

/// Validates an author name: any non-empty string.
pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Validates a magazine name: character count within the allowed window.
pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

/// Validates a magazine category: any non-empty string.
pub(crate) fn validate_magazine_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyMagazineCategory);
    }
    Ok(())
}

/// Validates an article title: character count within the allowed window.
pub(crate) fn validate_article_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::ArticleTitleLength { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        validate_article_title, validate_author_name, validate_magazine_category,
        validate_magazine_name, ValidationError,
    };

    #[test]
    fn author_name_rejects_empty_only() {
        assert_eq!(
            validate_author_name("").unwrap_err(),
            ValidationError::EmptyAuthorName
        );
        assert!(validate_author_name("A").is_ok());
    }

    #[test]
    fn magazine_name_window_is_inclusive() {
        assert!(validate_magazine_name("ab").is_ok());
        assert!(validate_magazine_name("abcdefghijklmnop").is_ok());
        assert_eq!(
            validate_magazine_name("a").unwrap_err(),
            ValidationError::MagazineNameLength { len: 1 }
        );
        assert_eq!(
            validate_magazine_name("abcdefghijklmnopq").unwrap_err(),
            ValidationError::MagazineNameLength { len: 17 }
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Two characters, six bytes.
        assert!(validate_magazine_name("日本").is_ok());
    }

    #[test]
    fn article_title_window_is_inclusive() {
        assert!(validate_article_title("abcde").is_ok());
        assert!(validate_article_title(&"a".repeat(50)).is_ok());
        assert_eq!(
            validate_article_title("abcd").unwrap_err(),
            ValidationError::ArticleTitleLength { len: 4 }
        );
        assert_eq!(
            validate_article_title(&"a".repeat(51)).unwrap_err(),
            ValidationError::ArticleTitleLength { len: 51 }
        );
    }

    #[test]
    fn category_rejects_empty_only() {
        assert_eq!(
            validate_magazine_category("").unwrap_err(),
            ValidationError::EmptyMagazineCategory
        );
        assert!(validate_magazine_category("News").is_ok());
    }

    #[test]
    fn error_messages_name_field_and_rule() {
        let message = ValidationError::MagazineNameLength { len: 1 }.to_string();
        assert!(message.contains("magazine name"));
        assert!(message.contains("2-16"));

        let message = ValidationError::ArticleTitleLength { len: 4 }.to_string();
        assert!(message.contains("article title"));
        assert!(message.contains("5-50"));
    }
}
