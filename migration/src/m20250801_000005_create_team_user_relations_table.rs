use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamUserRelations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamUserRelations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeamUserRelations::TeamId).uuid().not_null())
                    // ユーザーは外部サブシステムの管轄のため外部キー制約は持たない
                    .col(ColumnDef::new(TeamUserRelations::UserId).uuid().not_null())
                    .col(ColumnDef::new(TeamUserRelations::Role).string().not_null())
                    .col(
                        ColumnDef::new(TeamUserRelations::CreatedAt)
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
                    .name("fk_team_user_relations_team_id")
                    .from(TeamUserRelations::Table, TeamUserRelations::TeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Add indexes separately
        manager
            .create_index(
                Index::create()
                    .name("idx_team_user_relations_team_id")
                    .table(TeamUserRelations::Table)
                    .col(TeamUserRelations::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_user_relations_team_id_user_id")
                    .table(TeamUserRelations::Table)
                    .col(TeamUserRelations::TeamId)
                    .col(TeamUserRelations::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamUserRelations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeamUserRelations {
    Table,
    Id,
    TeamId,
    UserId,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}
