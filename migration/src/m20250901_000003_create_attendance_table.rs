use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attendance::Identifier)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendance::FullName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendance::Department)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendance::Year)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendance::Section)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendance::CheckedInAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Concurrent scans of the same badge race to this index; exactly one
        // insert wins and the loser is told the person is already in.
        manager
            .create_index(
                Index::create()
                    .name("uq_attendance_identifier")
                    .table(Attendance::Table)
                    .col(Attendance::Identifier)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Attendance::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    Identifier,
    FullName,
    Department,
    Year,
    Section,
    CheckedInAt,
}
