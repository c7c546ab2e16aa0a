//! Magazine entity.
//!
//! # Responsibility
//! - Define the named, categorized publication articles are published in.
//! - Re-validate name and category on every assignment.
//!
//! # Invariants
//! - `name` stays within the 2..=16 character window at all times.
//! - `category` is never empty.
//! - A rejected setter leaves the prior value unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::validation::{
    validate_magazine_category, validate_magazine_name, ValidationError,
};

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// A named, categorized publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    /// Stable global ID used for linking and identity-based deduplication.
    pub id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a new magazine with a generated stable ID.
    ///
    /// # Errors
    /// - `MagazineNameLength` when `name` is outside 2..=16 characters.
    /// - `EmptyMagazineCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided stable ID.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_magazine_category(&category)?;
        Ok(Self { id, name, category })
    }

    /// Returns the magazine's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the magazine's category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Renames the magazine after re-validating the candidate value.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Recategorizes the magazine after re-validating the candidate value.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_magazine_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Re-checks every field invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_magazine_name(&self.name)?;
        validate_magazine_category(&self.category)
    }
}
