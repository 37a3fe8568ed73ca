use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per checked-in identifier. The snapshot columns are copied from the
/// member at check-in time so the record stays readable even if registrations
/// are later wiped.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub identifier: String,
    pub full_name: String,
    pub department: String,
    pub year: String,
    pub section: String,
    pub checked_in_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
