//! HTTP handlers, one module per resource area.

pub mod advisors;
pub mod blog;
pub mod contact_info;
pub mod course_content;
pub mod courses;
pub mod curriculum;
pub mod hero;
pub mod internship;
pub mod leads;
pub mod placements;
pub mod projects;
pub mod uploads;
