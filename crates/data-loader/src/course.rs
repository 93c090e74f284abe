use crate::{error::LoadError, util::read_document};
use chrono::Utc;
use database::{
    entities::{
        courses::{self, PrereqGroups, QuarterRefs},
        quarters,
    },
    services::{
        course::{CourseIndex, CourseService},
        quarter::QuarterService,
    },
};
use log::{error, info};
use models::{course_data::CourseDocument, validate::validate_course_document};
use sea_orm::{ActiveValue::Set, DatabaseConnection};
use std::{collections::HashSet, path::Path};
use uuid::Uuid;

/// Loads a course-catalog document into the database
///
/// Seeds the fixed quarter set, validates the document, inserts every
/// course without prerequisite links, then resolves and writes the links
/// in a second pass. A course's prerequisite may be another course in the
/// same file, so the links can only be patched once all records exist.
///
/// Returns the number of courses inserted. File and validation errors are
/// logged and re-raised; nothing is persisted when validation fails.
pub async fn load_courses(db: &DatabaseConnection, path: &Path) -> Result<usize, LoadError> {
    match load_catalog(db, path).await {
        Ok(count) => {
            info!("successfully loaded {count} courses from {}", path.display());
            Ok(count)
        }
        Err(err) => {
            error!("course load failed for {}: {err}", path.display());
            Err(err)
        }
    }
}

async fn load_catalog(db: &DatabaseConnection, path: &Path) -> Result<usize, LoadError> {
    let quarters = QuarterService::seed(db).await?;

    let raw = read_document(path)?;
    validate_course_document(&raw)?;
    let catalog: CourseDocument =
        serde_json::from_value(raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // Pass 1: insert every course without prerequisite links
    let now = Utc::now().naive_utc();
    let rows: Vec<courses::ActiveModel> = catalog
        .values()
        .map(|entry| courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            dept: Set(entry.dept.clone()),
            cid: Set(entry.cid.clone()),
            name: Set(entry.name.clone()),
            units: Set(entry.units),
            upper_only: Set(entry.upper_only),
            quarters: Set(quarter_refs(&entry.quarters, &quarters)),
            prereq: Set(PrereqGroups::default()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();
    let inserted = CourseService::insert_courses(db, rows).await?;
    info!("inserted {inserted} courses from {}", path.display());

    // Pass 2: resolve prerequisite references now that every course exists
    let index = CourseService::load_index(db).await?;
    for entry in catalog.values() {
        let prereq = resolve_prereq_groups(&entry.prereqs, &index);
        if let Some(course) = CourseService::find_by_key(db, &entry.key()).await? {
            CourseService::set_prereq(db, course, prereq).await?;
        }
    }
    info!("updated prerequisites");

    Ok(inserted)
}

/// Maps quarter codes onto the seeded quarter records, which are ordered
/// by code. Codes are range-checked during validation.
fn quarter_refs(codes: &[u8], seeded: &[quarters::Model]) -> QuarterRefs {
    QuarterRefs(
        codes
            .iter()
            .filter_map(|code| seeded.get(*code as usize))
            .map(|quarter| quarter.id)
            .collect(),
    )
}

/// Normalizes prerequisite OR-sets into OR-groups of course record ids
///
/// Members that do not resolve are skipped without report, and a group
/// whose members all fail to resolve is omitted entirely rather than
/// persisted empty. The order of the sets is preserved; the order of
/// members inside a set is not meaningful.
fn resolve_prereq_groups(prereqs: &[HashSet<String>], index: &CourseIndex) -> PrereqGroups {
    let mut groups = Vec::new();

    for or_set in prereqs {
        let group: Vec<Uuid> = or_set
            .iter()
            .filter_map(|reference| reference.parse().ok())
            .filter_map(|key| index.resolve(&key))
            .collect();

        if !group.is_empty() {
            groups.push(group);
        }
    }

    PrereqGroups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(dept: &str, cid: &str) -> courses::Model {
        let now = Utc::now().naive_utc();
        courses::Model {
            id: Uuid::new_v4(),
            dept: dept.to_string(),
            cid: cid.to_string(),
            name: format!("{dept} {cid}"),
            units: 4.0,
            upper_only: false,
            quarters: QuarterRefs::default(),
            prereq: PrereqGroups::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn quarter(code: i16) -> quarters::Model {
        quarters::Model {
            id: Uuid::new_v4(),
            name: format!("quarter {code}"),
            code,
        }
    }

    fn or_set(members: &[&str]) -> HashSet<String> {
        members.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_unresolved_members_are_skipped_silently() {
        let known = vec![course("A", "1"), course("C", "3")];
        let index = CourseIndex::from_models(&known);

        let prereqs = vec![or_set(&["A 1", "B 2"]), or_set(&["C 3"])];
        let groups = resolve_prereq_groups(&prereqs, &index);

        assert_eq!(groups.0.len(), 2);
        assert_eq!(groups.0[0], vec![known[0].id]);
        assert_eq!(groups.0[1], vec![known[1].id]);
    }

    #[test]
    fn test_fully_unresolved_groups_are_dropped() {
        let known = vec![course("MATH", "2B")];
        let index = CourseIndex::from_models(&known);

        let prereqs = vec![
            or_set(&["CSE 46", "I&CSCI 23"]),
            or_set(&["MATH 2B"]),
            or_set(&[]),
        ];
        let groups = resolve_prereq_groups(&prereqs, &index);

        assert_eq!(groups.0, vec![vec![known[0].id]]);
    }

    #[test]
    fn test_group_order_is_preserved() {
        let known = vec![course("A", "1"), course("B", "2"), course("C", "3")];
        let index = CourseIndex::from_models(&known);

        let prereqs = vec![or_set(&["C 3"]), or_set(&["A 1"]), or_set(&["B 2"])];
        let groups = resolve_prereq_groups(&prereqs, &index);

        assert_eq!(
            groups.0,
            vec![vec![known[2].id], vec![known[0].id], vec![known[1].id]]
        );
    }

    #[test]
    fn test_multi_token_departments_resolve() {
        let known = vec![course("PHY SCI", "122B")];
        let index = CourseIndex::from_models(&known);

        let groups = resolve_prereq_groups(&[or_set(&["PHY SCI 122B"])], &index);
        assert_eq!(groups.0, vec![vec![known[0].id]]);
    }

    #[test]
    fn test_quarter_refs_follow_code_order() {
        let seeded: Vec<quarters::Model> = (0..6).map(quarter).collect();

        let refs = quarter_refs(&[3, 0, 5], &seeded);
        assert_eq!(
            refs.0,
            vec![seeded[3].id, seeded[0].id, seeded[5].id]
        );
    }
}
