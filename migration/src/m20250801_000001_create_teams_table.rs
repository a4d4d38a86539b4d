use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teams::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teams::Name).string())
                    .col(ColumnDef::new(Teams::Subdomain).string_len(63))
                    .col(ColumnDef::new(Teams::LogoMediaUrl).string())
                    .col(ColumnDef::new(Teams::StripeCustomerId).string())
                    .col(ColumnDef::new(Teams::StripeSubscriptionId).string())
                    .col(
                        ColumnDef::new(Teams::MinimumPublicWebinars)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Teams::Address).json().not_null())
                    .col(
                        ColumnDef::new(Teams::BillingCycle)
                            .string_len(10)
                            .not_null()
                            .default("Month"),
                    )
                    .col(ColumnDef::new(Teams::Last4).string_len(4))
                    .col(ColumnDef::new(Teams::CcType).string_len(50))
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Teams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Add indexes separately
        manager
            .create_index(
                Index::create()
                    .name("idx_teams_subdomain")
                    .table(Teams::Table)
                    .col(Teams::Subdomain)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teams_stripe_customer_id")
                    .table(Teams::Table)
                    .col(Teams::StripeCustomerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    Name,
    Subdomain,
    LogoMediaUrl,
    StripeCustomerId,
    StripeSubscriptionId,
    MinimumPublicWebinars,
    Address,
    BillingCycle,
    Last4,
    CcType,
    CreatedAt,
    UpdatedAt,
}
