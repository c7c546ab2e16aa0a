//! Press domain model: authors, magazines, and articles.
//!
//! # Responsibility
//! - Define the canonical entity shapes used by core business logic.
//! - Enforce field-level invariants at construction and on every setter.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID; equality of identity is
//!   equality of id, never of name/category/title values.
//! - A failed setter leaves the prior field value unchanged.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
