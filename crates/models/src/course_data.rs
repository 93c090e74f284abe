use crate::course_key::CourseKey;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// A course-catalog document: arbitrary keys mapped to course entries
pub type CourseDocument = BTreeMap<String, CourseEntry>;

/// One course entry as it appears in a catalog file
///
/// `quarters` holds codes into the fixed quarter sequence. `prereqs` is a
/// sequence of OR-sets of natural-key strings: satisfying any member
/// satisfies that set, and all sets must be satisfied.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseEntry {
    pub name: String,
    pub cid: String,
    pub units: f32,
    #[serde(rename = "upperOnly")]
    pub upper_only: bool,
    pub dept: String,
    pub quarters: Vec<u8>,
    pub prereqs: Vec<HashSet<String>>,
}

impl CourseEntry {
    /// The natural key identifying this course
    pub fn key(&self) -> CourseKey {
        CourseKey::new(&self.dept, &self.cid)
    }
}
