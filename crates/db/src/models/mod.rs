//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Aggregate view structs where a page is served from several tables

pub mod advisor;
pub mod blog;
pub mod contact_info;
pub mod course;
pub mod curriculum;
pub mod hero;
pub mod internship;
pub mod lead;
pub mod placements;
pub mod project;
