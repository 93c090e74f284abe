//! Structural validation for the two input document shapes.
//!
//! Documents are checked in full before anything is persisted, and every
//! violated constraint is collected so a single failure report names them
//! all instead of stopping at the first.

use crate::quarter;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single violated constraint, located by a dotted path into the document
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl Display for SchemaViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A document that failed schema validation
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    violations: Vec<SchemaViolation>,
}

impl SchemaError {
    fn new(violations: Vec<SchemaViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "document failed validation with {} violation(s):",
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Validates a course-catalog document: an object mapping arbitrary keys
/// to course entries
pub fn validate_course_document(doc: &Value) -> Result<(), SchemaError> {
    let mut violations = Vec::new();

    let Some(entries) = doc.as_object() else {
        return Err(SchemaError::new(vec![SchemaViolation::new(
            "$",
            "expected an object mapping keys to course entries",
        )]));
    };

    for (key, entry) in entries {
        let path = format!("$.{key}");
        let Some(course) = entry.as_object() else {
            violations.push(SchemaViolation::new(path, "expected a course object"));
            continue;
        };

        expect_string(course, &path, "name", &mut violations);
        expect_string(course, &path, "cid", &mut violations);
        expect_number(course, &path, "units", &mut violations);
        expect_bool(course, &path, "upperOnly", &mut violations);
        expect_string(course, &path, "dept", &mut violations);
        check_quarters(course, &path, &mut violations);
        check_prereqs(course, &path, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::new(violations))
    }
}

/// Validates a degree-requirement document
pub fn validate_requirement_document(doc: &Value) -> Result<(), SchemaError> {
    let mut violations = Vec::new();

    let Some(root) = doc.as_object() else {
        return Err(SchemaError::new(vec![SchemaViolation::new(
            "$",
            "expected a requirement object",
        )]));
    };

    expect_string(root, "$", "major", &mut violations);
    check_requirement_list(root, "requirements", &mut violations);
    check_requirement_list(root, "specs", &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::new(violations))
    }
}

fn check_quarters(course: &Map<String, Value>, path: &str, out: &mut Vec<SchemaViolation>) {
    match course.get("quarters") {
        Some(Value::Array(codes)) => {
            for (idx, code) in codes.iter().enumerate() {
                let in_range = code
                    .as_u64()
                    .is_some_and(|c| (c as usize) < quarter::quarter_count());
                if !in_range {
                    out.push(SchemaViolation::new(
                        format!("{path}.quarters[{idx}]"),
                        format!(
                            "expected an integer quarter code below {}",
                            quarter::quarter_count()
                        ),
                    ));
                }
            }
        }
        Some(_) => out.push(SchemaViolation::new(
            format!("{path}.quarters"),
            "expected an array of quarter codes",
        )),
        None => out.push(SchemaViolation::new(
            format!("{path}.quarters"),
            "missing required field",
        )),
    }
}

fn check_prereqs(course: &Map<String, Value>, path: &str, out: &mut Vec<SchemaViolation>) {
    match course.get("prereqs") {
        Some(Value::Array(groups)) => {
            for (gidx, group) in groups.iter().enumerate() {
                let Some(members) = group.as_array() else {
                    out.push(SchemaViolation::new(
                        format!("{path}.prereqs[{gidx}]"),
                        "expected an array of course references",
                    ));
                    continue;
                };
                for (midx, member) in members.iter().enumerate() {
                    if !member.is_string() {
                        out.push(SchemaViolation::new(
                            format!("{path}.prereqs[{gidx}][{midx}]"),
                            "expected a course reference string",
                        ));
                    }
                }
            }
        }
        Some(_) => out.push(SchemaViolation::new(
            format!("{path}.prereqs"),
            "expected an array of prerequisite groups",
        )),
        None => out.push(SchemaViolation::new(
            format!("{path}.prereqs"),
            "missing required field",
        )),
    }
}

fn check_requirement_list(root: &Map<String, Value>, field: &str, out: &mut Vec<SchemaViolation>) {
    // absent lists are treated as empty by the loader
    let Some(value) = root.get(field) else {
        return;
    };

    let Some(entries) = value.as_array() else {
        out.push(SchemaViolation::new(
            format!("$.{field}"),
            "expected an array of requirement objects",
        ));
        return;
    };

    for (idx, entry) in entries.iter().enumerate() {
        let path = format!("$.{field}[{idx}]");
        let Some(requirement) = entry.as_object() else {
            out.push(SchemaViolation::new(path, "expected a requirement object"));
            continue;
        };

        expect_string(requirement, &path, "name", out);
        check_sub_reqs(requirement, &path, out);
    }
}

fn check_sub_reqs(requirement: &Map<String, Value>, path: &str, out: &mut Vec<SchemaViolation>) {
    let Some(value) = requirement.get("sub_reqs") else {
        return;
    };

    let Some(entries) = value.as_array() else {
        out.push(SchemaViolation::new(
            format!("{path}.sub_reqs"),
            "expected an array of sub-requirements",
        ));
        return;
    };

    for (idx, entry) in entries.iter().enumerate() {
        let sub_path = format!("{path}.sub_reqs[{idx}]");
        let Some(sub_req) = entry.as_object() else {
            out.push(SchemaViolation::new(sub_path, "expected a sub-requirement object"));
            continue;
        };

        let count_ok = sub_req
            .get("req_num")
            .and_then(Value::as_i64)
            .is_some_and(|n| (0..=i64::from(i32::MAX)).contains(&n));
        if !count_ok {
            out.push(SchemaViolation::new(
                format!("{sub_path}.req_num"),
                "expected a non-negative integer",
            ));
        }

        match sub_req.get("req_list") {
            None => {}
            Some(Value::Array(members)) => {
                for (midx, member) in members.iter().enumerate() {
                    if !member.is_string() {
                        out.push(SchemaViolation::new(
                            format!("{sub_path}.req_list[{midx}]"),
                            "expected a course reference string",
                        ));
                    }
                }
            }
            Some(_) => out.push(SchemaViolation::new(
                format!("{sub_path}.req_list"),
                "expected an array of course references",
            )),
        }
    }
}

fn expect_string(obj: &Map<String, Value>, path: &str, field: &str, out: &mut Vec<SchemaViolation>) {
    match obj.get(field) {
        Some(Value::String(_)) => {}
        Some(_) => out.push(SchemaViolation::new(
            format!("{path}.{field}"),
            "expected a string",
        )),
        None => out.push(SchemaViolation::new(
            format!("{path}.{field}"),
            "missing required field",
        )),
    }
}

fn expect_number(obj: &Map<String, Value>, path: &str, field: &str, out: &mut Vec<SchemaViolation>) {
    match obj.get(field) {
        Some(value) if value.is_number() => {}
        Some(_) => out.push(SchemaViolation::new(
            format!("{path}.{field}"),
            "expected a number",
        )),
        None => out.push(SchemaViolation::new(
            format!("{path}.{field}"),
            "missing required field",
        )),
    }
}

fn expect_bool(obj: &Map<String, Value>, path: &str, field: &str, out: &mut Vec<SchemaViolation>) {
    match obj.get(field) {
        Some(Value::Bool(_)) => {}
        Some(_) => out.push(SchemaViolation::new(
            format!("{path}.{field}"),
            "expected a boolean",
        )),
        None => out.push(SchemaViolation::new(
            format!("{path}.{field}"),
            "missing required field",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn course_entry() -> Value {
        json!({
            "name": "DES&ANALYS OF ALGOR",
            "cid": "161",
            "units": 4.0,
            "upperOnly": true,
            "dept": "COMPSCI",
            "quarters": [0, 1, 2],
            "prereqs": [["I&CSCI 46", "CSE 46"], ["MATH 2B"]]
        })
    }

    #[test]
    fn test_valid_course_document() {
        let doc = json!({"COMPSCI161": course_entry()});
        assert!(validate_course_document(&doc).is_ok());
    }

    #[test]
    fn test_course_document_must_be_an_object() {
        let err = validate_course_document(&json!([1, 2])).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].path, "$");
    }

    #[test]
    fn test_all_course_violations_are_collected() {
        let mut entry = course_entry();
        entry["units"] = json!("four");
        entry.as_object_mut().unwrap().remove("dept");
        entry["quarters"] = json!([0, 9]);
        let doc = json!({"BAD": entry, "OK": course_entry()});

        let err = validate_course_document(&doc).unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["$.BAD.units", "$.BAD.dept", "$.BAD.quarters[1]"]
        );
        assert!(err.to_string().contains("3 violation(s)"));
        assert!(err.to_string().contains("$.BAD.units: expected a number"));
    }

    #[test]
    fn test_prereq_nesting_is_checked() {
        let mut entry = course_entry();
        entry["prereqs"] = json!([["MATH 2B"], "CSE 46", [7]]);
        let doc = json!({"X": entry});

        let err = validate_course_document(&doc).unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$.X.prereqs[1]", "$.X.prereqs[2][0]"]);
    }

    #[test]
    fn test_valid_requirement_document() {
        let doc = json!({
            "major": "Computer Science",
            "requirements": [
                {"name": "Lower-division", "sub_reqs": [
                    {"req_num": 2, "req_list": ["I&CSCI 31", "I&CSCI 32"]}
                ]}
            ],
            "specs": []
        });
        assert!(validate_requirement_document(&doc).is_ok());
    }

    #[test]
    fn test_requirement_sections_may_be_absent() {
        let doc = json!({"major": "Informatics"});
        assert!(validate_requirement_document(&doc).is_ok());
    }

    #[test]
    fn test_requirement_violations_are_collected() {
        let doc = json!({
            "requirements": [
                {"sub_reqs": [{"req_num": -1, "req_list": ["I&CSCI 31", 4]}]},
                "not an object"
            ],
            "specs": {"name": "wrong shape"}
        });

        let err = validate_requirement_document(&doc).unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "$.major",
                "$.requirements[0].name",
                "$.requirements[0].sub_reqs[0].req_num",
                "$.requirements[0].sub_reqs[0].req_list[1]",
                "$.requirements[1]",
                "$.specs",
            ]
        );
    }
}
