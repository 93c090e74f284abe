use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Custom error type for parsing course keys
#[derive(Debug, Clone, PartialEq)]
pub struct ParseCourseKeyError;

impl Display for ParseCourseKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Empty course reference")
    }
}

impl std::error::Error for ParseCourseKeyError {}

/// Natural key for a course: department plus course id
///
/// Departments may contain embedded spaces ("PHY SCI"), so a reference
/// string is split on whitespace with the last token taken as the course
/// id and everything before it as the department.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseKey {
    pub dept: String,
    pub cid: String,
}

impl CourseKey {
    pub fn new(dept: impl Into<String>, cid: impl Into<String>) -> Self {
        Self {
            dept: dept.into(),
            cid: cid.into(),
        }
    }
}

impl FromStr for CourseKey {
    type Err = ParseCourseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        let Some(cid) = tokens.pop() else {
            return Err(ParseCourseKeyError);
        };

        Ok(Self {
            dept: tokens.join(" "),
            cid: cid.to_string(),
        })
    }
}

impl Display for CourseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.dept.is_empty() {
            write!(f, "{}", self.cid)
        } else {
            write!(f, "{} {}", self.dept, self.cid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_department() {
        let key: CourseKey = "I&CSCI 6B".parse().unwrap();
        assert_eq!(key.dept, "I&CSCI");
        assert_eq!(key.cid, "6B");
    }

    #[test]
    fn test_multi_token_department() {
        let key: CourseKey = "PHY SCI 122B".parse().unwrap();
        assert_eq!(key.dept, "PHY SCI");
        assert_eq!(key.cid, "122B");
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let key: CourseKey = "  PHY   SCI   122B ".parse().unwrap();
        assert_eq!(key.dept, "PHY SCI");
        assert_eq!(key.cid, "122B");
    }

    #[test]
    fn test_bare_course_id() {
        let key: CourseKey = "161".parse().unwrap();
        assert_eq!(key.dept, "");
        assert_eq!(key.cid, "161");
    }

    #[test]
    fn test_empty_reference_is_an_error() {
        assert!("".parse::<CourseKey>().is_err());
        assert!("   ".parse::<CourseKey>().is_err());
    }

    #[test]
    fn test_display() {
        let key = CourseKey::new("PHY SCI", "122B");
        assert_eq!(key.to_string(), "PHY SCI 122B");
        assert_eq!(CourseKey::new("", "161").to_string(), "161");
    }
}
