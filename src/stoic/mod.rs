//! Placeholder "stoic" insights.
//!
//! Real mood analysis is meant to live in an external language-model service
//! that does not exist yet. Until it does, these functions return canned
//! content and never fail.

pub mod analytics;
pub mod comment;

pub use analytics::mood_analytics;
pub use comment::{generate_stoic_comment, StoicReply};
