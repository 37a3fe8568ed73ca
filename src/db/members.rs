use crate::db::postgres_service::PostgresService;
use crate::scan::sanitize::sanitize_text;
use crate::types::error::AppError;
use entity::member::{Entity as Member, Model as MemberModel};
use entity::team::{Entity as Team, Model as TeamModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl PostgresService {
    /// Find a member by canonical identifier. The raw value is sanitized
    /// first; input that sanitizes to nothing never reaches the store.
    pub async fn lookup_member(&self, identifier: &str) -> Result<Option<MemberModel>, AppError> {
        let canonical = sanitize_text(identifier);
        if canonical.is_empty() {
            return Ok(None);
        }
        Ok(Member::find()
            .filter(entity::member::Column::Identifier.eq(&canonical))
            .one(&self.db)
            .await?)
    }

    pub async fn count_members(&self) -> Result<u64, AppError> {
        Ok(Member::find().count(&self.db).await?)
    }

    pub async fn list_teams_with_members(
        &self,
    ) -> Result<Vec<(TeamModel, Vec<MemberModel>)>, AppError> {
        Ok(Team::find()
            .find_with_related(Member)
            .all(&self.db)
            .await?)
    }

    /// Bulk wipe; members go with their teams via the cascade.
    pub async fn delete_all_registrations(&self) -> Result<u64, AppError> {
        Ok(Team::delete_many().exec(&self.db).await?.rows_affected)
    }
}
