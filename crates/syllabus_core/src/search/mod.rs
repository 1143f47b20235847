//! Topic title search entry points.
//!
//! # Responsibility
//! - Expose the fixed substring query over topic titles.
//! - Keep result shaping and needle escaping inside core.

pub mod title;
