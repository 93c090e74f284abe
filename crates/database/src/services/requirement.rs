use crate::entities::requirements::{self, SubReqs};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

pub struct RequirementService;

impl RequirementService {
    /// Upserts a requirement by name, replacing its sub-requirements
    /// wholesale so repeated loads are idempotent per name
    pub async fn upsert(
        db: &DatabaseConnection,
        name: &str,
        sub_reqs: SubReqs,
    ) -> Result<requirements::Model, DbErr> {
        let existing = requirements::Entity::find()
            .filter(requirements::Column::Name.eq(name))
            .one(db)
            .await?;

        match existing {
            Some(requirement) => {
                let mut requirement = requirement.into_active_model();
                requirement.sub_reqs = Set(sub_reqs);
                requirement.update(db).await
            }
            None => {
                requirements::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(name.to_string()),
                    sub_reqs: Set(sub_reqs),
                }
                .insert(db)
                .await
            }
        }
    }
}
