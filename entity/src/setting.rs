use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Process-wide key-value configuration mutated by staff actions only.
/// Known keys: `registrations_open` ("true"/"false") and `registration_limit`
/// (non-negative integer as text, "0" meaning unlimited).
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
