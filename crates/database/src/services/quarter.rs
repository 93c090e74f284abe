use crate::entities::quarters;
use models::quarter::quarter_names;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

pub struct QuarterService;

impl QuarterService {
    /// Upserts the six fixed quarter records and returns them ordered by
    /// code, for resolving the quarter codes carried by course entries.
    ///
    /// Repeated calls refresh the codes and create no duplicates.
    pub async fn seed(db: &DatabaseConnection) -> Result<Vec<quarters::Model>, DbErr> {
        let names = quarter_names();
        let mut seeded = Vec::with_capacity(names.len());

        for (code, name) in names.iter().enumerate() {
            let code = code as i16;
            let existing = quarters::Entity::find()
                .filter(quarters::Column::Name.eq(name))
                .one(db)
                .await?;

            let quarter = match existing {
                Some(quarter) if quarter.code == code => quarter,
                Some(quarter) => {
                    let mut quarter = quarter.into_active_model();
                    quarter.code = Set(code);
                    quarter.update(db).await?
                }
                None => {
                    quarters::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        name: Set(name.clone()),
                        code: Set(code),
                    }
                    .insert(db)
                    .await?
                }
            };

            seeded.push(quarter);
        }

        Ok(seeded)
    }
}
