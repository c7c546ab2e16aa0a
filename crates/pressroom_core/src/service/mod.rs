//! Core use-case services.
//!
//! # Responsibility
//! - Derive relational answers (who wrote what, where) from registry scans.
//! - Keep callers decoupled from the registry representation.

pub mod press_service;
