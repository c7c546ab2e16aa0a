//! Registry layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the append-only press registry contract.
//! - Keep storage/scan details out of the query service.
//!
//! # Invariants
//! - Registry writes must pass entity `validate()` before membership.
//! - Membership is append-only: no deletion, no replacement.

pub mod press_repo;
