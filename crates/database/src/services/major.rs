use crate::entities::majors::{self, RequirementRefs};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

pub struct MajorService;

impl MajorService {
    /// Upserts a major by uppercased name with both reference lists
    /// cleared, so each load starts from an empty record
    pub async fn reset(db: &DatabaseConnection, name: &str) -> Result<majors::Model, DbErr> {
        let name = name.to_uppercase();
        let existing = majors::Entity::find()
            .filter(majors::Column::Name.eq(&name))
            .one(db)
            .await?;

        match existing {
            Some(major) => {
                let mut major = major.into_active_model();
                major.requirements = Set(RequirementRefs::default());
                major.specs = Set(RequirementRefs::default());
                major.update(db).await
            }
            None => {
                majors::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(name),
                    requirements: Set(RequirementRefs::default()),
                    specs: Set(RequirementRefs::default()),
                }
                .insert(db)
                .await
            }
        }
    }

    /// Writes the major's ordered requirement and spec references
    pub async fn set_references(
        db: &DatabaseConnection,
        major: majors::Model,
        requirements: RequirementRefs,
        specs: RequirementRefs,
    ) -> Result<majors::Model, DbErr> {
        let mut major = major.into_active_model();
        major.requirements = Set(requirements);
        major.specs = Set(specs);
        major.update(db).await
    }
}
