use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered quarter references resolved from the seeded quarter set
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct QuarterRefs(pub Vec<Uuid>);

/// Prerequisite OR-groups: any course in a group satisfies it, and every
/// group must be satisfied
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PrereqGroups(pub Vec<Vec<Uuid>>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub dept: String,
    pub cid: String,
    pub name: String,
    pub units: f32,
    pub upper_only: bool,
    pub quarters: QuarterRefs,
    pub prereq: PrereqGroups,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
