//! Author entity.
//!
//! # Responsibility
//! - Define the named party that writes articles.
//! - Enforce the write-once name contract.
//!
//! # Invariants
//! - `name` is non-empty and set exactly once at construction.
//! - Authors hold no relationship fields; their articles and magazines are
//!   derived from the registry at query time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::validation::{validate_author_name, ValidationError};

/// Stable identifier for an author.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = Uuid;

/// A named party that writes articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable global ID used for linking and identity-based deduplication.
    pub id: AuthorId,
    name: String,
}

impl Author {
    /// Creates a new author with a generated stable ID.
    ///
    /// # Errors
    /// - `EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self { id, name })
    }

    /// Returns the author's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rejects any rename attempt.
    ///
    /// The name is fixed at construction; this call fails regardless of the
    /// candidate value so the ban is observable at runtime, not just absent
    /// from the API.
    pub fn set_name(&mut self, _name: impl Into<String>) -> Result<(), ValidationError> {
        Err(ValidationError::AuthorNameImmutable)
    }

    /// Re-checks every field invariant.
    ///
    /// Registry write paths call this so hand-built or deserialized values
    /// cannot bypass construction-time validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_author_name(&self.name)
    }
}
