use crate::{error::LoadError, util::read_document};
use database::{
    entities::{
        majors::RequirementRefs,
        requirements::{SubReq, SubReqs},
    },
    services::{
        course::{CourseIndex, CourseService},
        major::MajorService,
        requirement::RequirementService,
    },
};
use log::{error, info, warn};
use models::{
    course_key::CourseKey,
    requirement_data::{RequirementDocument, SubReqEntry},
    validate::validate_requirement_document,
};
use sea_orm::DatabaseConnection;
use std::path::Path;

/// Outcome of a successful requirement load
#[derive(Debug)]
pub struct RequirementLoadReport {
    /// Uppercased major name the document was loaded under
    pub major: String,
    pub requirement_count: usize,
    pub spec_count: usize,
    /// Course references that could not be resolved and were omitted from
    /// their sub-requirements
    pub unresolved: Vec<CourseKey>,
}

/// Loads a degree-requirement document into the database
///
/// The major and each named requirement are upserted, so loading the same
/// document again replaces rather than accumulates. Course references that
/// fail to resolve do not abort the load: they are dropped from their
/// sub-requirement and surfaced once, aggregated, after the load succeeds.
pub async fn load_requirements(
    db: &DatabaseConnection,
    path: &Path,
) -> Result<RequirementLoadReport, LoadError> {
    match load_tree(db, path).await {
        Ok(report) => {
            info!(
                "successfully loaded {} requirements and {} specs for {} from {}",
                report.requirement_count,
                report.spec_count,
                report.major,
                path.display()
            );
            if !report.unresolved.is_empty() {
                let missing: Vec<String> =
                    report.unresolved.iter().map(ToString::to_string).collect();
                warn!(
                    "skipped {} unresolved course reference(s): {}",
                    missing.len(),
                    missing.join(", ")
                );
            }
            Ok(report)
        }
        Err(err) => {
            error!("requirement load failed for {}: {err}", path.display());
            Err(err)
        }
    }
}

async fn load_tree(
    db: &DatabaseConnection,
    path: &Path,
) -> Result<RequirementLoadReport, LoadError> {
    let raw = read_document(path)?;
    validate_requirement_document(&raw)?;
    let doc: RequirementDocument =
        serde_json::from_value(raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let major = MajorService::reset(db, &doc.major).await?;
    let major_name = major.name.clone();

    let index = CourseService::load_index(db).await?;

    // requirements and specs are one ordered sequence; the split index
    // routes each persisted record into the right list on the major
    let split = doc.requirements.len();
    let mut requirement_refs = Vec::with_capacity(split);
    let mut spec_refs = Vec::with_capacity(doc.specs.len());
    let mut unresolved = Vec::new();

    for (idx, entry) in doc.requirements.iter().chain(&doc.specs).enumerate() {
        let (sub_reqs, missing) = build_sub_reqs(&entry.sub_reqs, &index);
        unresolved.extend(missing);

        let record = RequirementService::upsert(db, &entry.name, sub_reqs).await?;
        if idx < split {
            requirement_refs.push(record.id);
        } else {
            spec_refs.push(record.id);
        }
    }

    MajorService::set_references(
        db,
        major,
        RequirementRefs(requirement_refs),
        RequirementRefs(spec_refs),
    )
    .await?;

    Ok(RequirementLoadReport {
        major: major_name,
        requirement_count: split,
        spec_count: doc.specs.len(),
        unresolved,
    })
}

/// Builds the complete sub-requirement list for one requirement
///
/// Every course reference is resolved through the index; references that
/// do not resolve are recorded for the aggregated warning and omitted from
/// `req_list`. `req_num` is copied verbatim.
fn build_sub_reqs(entries: &[SubReqEntry], index: &CourseIndex) -> (SubReqs, Vec<CourseKey>) {
    let mut sub_reqs = Vec::with_capacity(entries.len());
    let mut unresolved = Vec::new();

    for entry in entries {
        let mut req_list = Vec::with_capacity(entry.req_list.len());

        for reference in &entry.req_list {
            match reference.parse::<CourseKey>() {
                Ok(key) => match index.resolve(&key) {
                    Some(id) => req_list.push(id),
                    None => unresolved.push(key),
                },
                // a blank reference can never resolve; report it as written
                Err(_) => unresolved.push(CourseKey::new("", reference.trim())),
            }
        }

        sub_reqs.push(SubReq {
            req_list,
            req_num: entry.req_num,
        });
    }

    (SubReqs(sub_reqs), unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use database::entities::courses::{self, PrereqGroups, QuarterRefs};
    use uuid::Uuid;

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

    fn sub_req(req_num: i32, req_list: &[&str]) -> SubReqEntry {
        SubReqEntry {
            req_num,
            req_list: req_list.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_unresolved_references_are_reported_and_omitted() {
        let known = vec![course("I&CSCI", "31"), course("I&CSCI", "32")];
        let index = CourseIndex::from_models(&known);

        let entries = vec![sub_req(2, &["I&CSCI 31", "PHY SCI 999", "I&CSCI 32"])];
        let (sub_reqs, unresolved) = build_sub_reqs(&entries, &index);

        assert_eq!(sub_reqs.0.len(), 1);
        assert_eq!(sub_reqs.0[0].req_num, 2);
        assert_eq!(sub_reqs.0[0].req_list, vec![known[0].id, known[1].id]);
        assert_eq!(unresolved, vec![CourseKey::new("PHY SCI", "999")]);
    }

    #[test]
    fn test_req_num_is_copied_verbatim() {
        let index = CourseIndex::from_models(&[]);

        let entries = vec![sub_req(5, &[]), sub_req(0, &[])];
        let (sub_reqs, unresolved) = build_sub_reqs(&entries, &index);

        assert_eq!(sub_reqs.0.len(), 2);
        assert_eq!(sub_reqs.0[0].req_num, 5);
        assert_eq!(sub_reqs.0[1].req_num, 0);
        assert!(unresolved.is_empty());
    }

    #[test]
    fn test_resolution_preserves_reference_order() {
        let known = vec![course("B", "2"), course("A", "1")];
        let index = CourseIndex::from_models(&known);

        let entries = vec![sub_req(2, &["A 1", "B 2"])];
        let (sub_reqs, _) = build_sub_reqs(&entries, &index);

        assert_eq!(sub_reqs.0[0].req_list, vec![known[1].id, known[0].id]);
    }

    #[test]
    fn test_blank_references_are_reported_not_fatal() {
        let index = CourseIndex::from_models(&[]);

        let entries = vec![sub_req(1, &["  "])];
        let (sub_reqs, unresolved) = build_sub_reqs(&entries, &index);

        assert!(sub_reqs.0[0].req_list.is_empty());
        assert_eq!(unresolved, vec![CourseKey::new("", "")]);
    }
}
