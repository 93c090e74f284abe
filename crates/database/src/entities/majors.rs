use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered references to requirement records
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RequirementRefs(pub Vec<Uuid>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "majors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String, // stored uppercased
    pub requirements: RequirementRefs,
    pub specs: RequirementRefs,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
