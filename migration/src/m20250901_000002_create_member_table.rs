use sea_orm_migration::prelude::*;

use super::m20250901_000001_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .col(
                        ColumnDef::new(Member::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Member::TeamId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::FullName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::Identifier)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::Gender)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::Department)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::Year)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::Section)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::Email)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::Mobile)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::IsLeader)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_team")
                            .from(Member::Table, Member::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Identifier and email are unique across every member of every team.
        // The database owns this invariant; the registration saga only
        // classifies the violation it gets back.
        manager
            .create_index(
                Index::create()
                    .name("uq_member_identifier")
                    .table(Member::Table)
                    .col(Member::Identifier)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uq_member_email")
                    .table(Member::Table)
                    .col(Member::Email)
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
                    .table(Member::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Member {
    Table,
    Id,
    TeamId,
    FullName,
    Identifier,
    Gender,
    Department,
    Year,
    Section,
    Email,
    Mobile,
    IsLeader,
    CreatedAt,
}
