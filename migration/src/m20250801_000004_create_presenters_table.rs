use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Presenters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Presenters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Presenters::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Presenters::Name).string().not_null())
                    .col(ColumnDef::new(Presenters::Email).string())
                    .col(ColumnDef::new(Presenters::ProfileMediaUrl).string())
                    .col(
                        ColumnDef::new(Presenters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Presenters::UpdatedAt)
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
                    .name("fk_presenters_team_id")
                    .from(Presenters::Table, Presenters::TeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Add indexes separately
        manager
            .create_index(
                Index::create()
                    .name("idx_presenters_team_id")
                    .table(Presenters::Table)
                    .col(Presenters::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Presenters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Presenters {
    Table,
    Id,
    TeamId,
    Name,
    Email,
    ProfileMediaUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}
