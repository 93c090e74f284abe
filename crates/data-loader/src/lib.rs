//! Batch loaders for the course-scheduling catalog.
//!
//! `course::load_courses` seeds the fixed quarter set and ingests a course
//! catalog in two passes (records first, prerequisite links second);
//! `requirement::load_requirements` ingests a major's degree requirements
//! against the already-loaded catalog. Both validate their input document
//! in full before touching the database.

pub mod course;
pub mod error;
pub mod requirement;
mod util;

pub use error::LoadError;
