use crate::entities::courses::{self, PrereqGroups};
use chrono::Utc;
use models::course_key::CourseKey;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

pub struct CourseService;

impl CourseService {
    /// Bulk-inserts the given course rows, returning how many were written
    pub async fn insert_courses(
        db: &DatabaseConnection,
        rows: Vec<courses::ActiveModel>,
    ) -> Result<usize, DbErr> {
        if rows.is_empty() {
            return Ok(0);
        }

        let count = rows.len();
        courses::Entity::insert_many(rows).exec(db).await?;
        Ok(count)
    }

    /// Looks up a single course by exact `(dept, cid)` match
    pub async fn find_by_key(
        db: &DatabaseConnection,
        key: &CourseKey,
    ) -> Result<Option<courses::Model>, DbErr> {
        courses::Entity::find()
            .filter(courses::Column::Dept.eq(&key.dept))
            .filter(courses::Column::Cid.eq(&key.cid))
            .one(db)
            .await
    }

    /// Replaces a course's prerequisite groups
    pub async fn set_prereq(
        db: &DatabaseConnection,
        course: courses::Model,
        prereq: PrereqGroups,
    ) -> Result<courses::Model, DbErr> {
        let mut course = course.into_active_model();
        course.prereq = Set(prereq);
        course.updated_at = Set(Utc::now().naive_utc());
        course.update(db).await
    }

    /// Loads every persisted course into a natural-key index
    pub async fn load_index(db: &DatabaseConnection) -> Result<CourseIndex, DbErr> {
        let models = courses::Entity::find().all(db).await?;
        Ok(CourseIndex::from_models(&models))
    }
}

/// In-memory natural-key index over persisted courses
///
/// Built from one query so that reference resolution during a load is a
/// lookup rather than a round trip per key. When two records share a
/// natural key the later one wins.
pub struct CourseIndex {
    by_key: HashMap<CourseKey, Uuid>,
}

impl CourseIndex {
    pub fn from_models(models: &[courses::Model]) -> Self {
        let by_key = models
            .iter()
            .map(|course| (CourseKey::new(&course.dept, &course.cid), course.id))
            .collect();

        Self { by_key }
    }

    /// Resolves a natural key to the matching course record id
    pub fn resolve(&self, key: &CourseKey) -> Option<Uuid> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::courses::QuarterRefs;

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

    #[test]
    fn test_resolve_exact_match() {
        let models = vec![course("COMPSCI", "161"), course("PHY SCI", "122B")];
        let index = CourseIndex::from_models(&models);

        assert_eq!(
            index.resolve(&CourseKey::new("COMPSCI", "161")),
            Some(models[0].id)
        );
        assert_eq!(
            index.resolve(&CourseKey::new("PHY SCI", "122B")),
            Some(models[1].id)
        );
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_resolve_requires_both_fields() {
        let models = vec![course("PHY SCI", "122B")];
        let index = CourseIndex::from_models(&models);

        assert_eq!(index.resolve(&CourseKey::new("PHY", "SCI 122B")), None);
        assert_eq!(index.resolve(&CourseKey::new("PHY SCI", "122")), None);
    }

    #[test]
    fn test_duplicate_keys_last_one_wins() {
        let models = vec![course("COMPSCI", "161"), course("COMPSCI", "161")];
        let index = CourseIndex::from_models(&models);

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.resolve(&CourseKey::new("COMPSCI", "161")),
            Some(models[1].id)
        );
    }
}
