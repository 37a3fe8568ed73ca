use crate::db::postgres_service::PostgresService;
use crate::scan::sanitize::sanitize_text;
use crate::types::error::AppError;
use chrono::Utc;
use entity::attendance::{ActiveModel as AttendanceActive, Entity as Attendance, Model as AttendanceModel};
use entity::member::Model as MemberModel;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr};
use uuid::Uuid;

impl PostgresService {
    /// Idempotently-guarded check-in. The member snapshot (name, department,
    /// year, section) is copied into the record at this moment.
    ///
    /// There is deliberately no "is this identifier already present" read
    /// before the insert: concurrent scans from different stations race
    /// straight to the unique index, exactly one wins, and the loser gets
    /// `AlreadyCheckedIn`. A read-then-write guard here would reintroduce
    /// the race the index exists to settle.
    pub async fn check_in(
        &self,
        identifier: &str,
    ) -> Result<(AttendanceModel, MemberModel), AppError> {
        let canonical = sanitize_text(identifier);
        if canonical.is_empty() {
            return Err(AppError::InvalidInput);
        }
        let member = self
            .lookup_member(&canonical)
            .await?
            .ok_or(AppError::NotFound)?;

        let record = AttendanceActive {
            id: Set(Uuid::new_v4()),
            identifier: Set(member.identifier.clone()),
            full_name: Set(member.full_name.clone()),
            department: Set(member.department.clone()),
            year: Set(member.year.clone()),
            section: Set(member.section.clone()),
            checked_in_at: Set(Utc::now()),
        };
        match Attendance::insert(record).exec_with_returning(&self.db).await {
            Ok(row) => Ok((row, member)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::AlreadyCheckedIn(member.identifier))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Mark absent. Removing an identifier that has no record is fine; the
    /// returned count says whether anything was actually deleted.
    pub async fn remove_check_in(&self, identifier: &str) -> Result<u64, AppError> {
        let canonical = sanitize_text(identifier);
        if canonical.is_empty() {
            return Err(AppError::InvalidInput);
        }
        Ok(Attendance::delete_many()
            .filter(entity::attendance::Column::Identifier.eq(canonical))
            .exec(&self.db)
            .await?
            .rows_affected)
    }

    pub async fn clear_attendance(&self) -> Result<u64, AppError> {
        Ok(Attendance::delete_many()
            .exec(&self.db)
            .await?
            .rows_affected)
    }

    /// Newest check-ins first, the order the staff table shows them in.
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceModel>, AppError> {
        Ok(Attendance::find()
            .order_by_desc(entity::attendance::Column::CheckedInAt)
            .all(&self.db)
            .await?)
    }

    pub async fn count_attendance(&self) -> Result<u64, AppError> {
        Ok(Attendance::find().count(&self.db).await?)
    }
}
