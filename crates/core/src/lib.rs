//! Shared domain types and content helpers for the yume backend.
//!
//! Houses everything the db and api crates both need: ID/timestamp
//! aliases, the domain error enum, slug generation, advisor keyword
//! highlighting, and the fixed choice sets content editors pick from.

pub mod choices;
pub mod error;
pub mod highlight;
pub mod slug;
pub mod types;
