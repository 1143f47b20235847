//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the catalog's operation surface.
//! - Enforce title uniqueness and the language/topic relational invariant.
//!
//! # Invariants
//! - Topic-facing operations resolve language titles through the language
//!   repository first; topics never store or compare language titles.
//! - Each operation detects its own precondition violations and returns a
//!   tagged error; no partial mutations.

pub mod language_service;
pub mod topic_service;
