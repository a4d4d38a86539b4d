use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ewebinars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ewebinars::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ewebinars::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Ewebinars::SetId).uuid())
                    .col(ColumnDef::new(Ewebinars::Title).string().not_null())
                    .col(
                        ColumnDef::new(Ewebinars::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Ewebinars::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Ewebinars::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Add foreign key constraints separately
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_ewebinars_team_id")
                    .from(Ewebinars::Table, Ewebinars::TeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_ewebinars_set_id")
                    .from(Ewebinars::Table, Ewebinars::SetId)
                    .to(EwebinarSets::Table, EwebinarSets::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        // Add indexes separately
        manager
            .create_index(
                Index::create()
                    .name("idx_ewebinars_team_id")
                    .table(Ewebinars::Table)
                    .col(Ewebinars::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ewebinars_set_id")
                    .table(Ewebinars::Table)
                    .col(Ewebinars::SetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ewebinars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ewebinars {
    Table,
    Id,
    TeamId,
    SetId,
    Title,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EwebinarSets {
    Table,
    Id,
}
