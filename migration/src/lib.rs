// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20250801_000001_create_teams_table;
mod m20250801_000002_create_ewebinar_sets_table;
mod m20250801_000003_create_ewebinars_table;
mod m20250801_000004_create_presenters_table;
mod m20250801_000005_create_team_user_relations_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 集約ルート（依存関係なし）
            Box::new(m20250801_000001_create_teams_table::Migration),
            // 2. 従属テーブル（teams に依存、ewebinars は sets にも依存）
            Box::new(m20250801_000002_create_ewebinar_sets_table::Migration),
            Box::new(m20250801_000003_create_ewebinars_table::Migration),
            Box::new(m20250801_000004_create_presenters_table::Migration),
            Box::new(m20250801_000005_create_team_user_relations_table::Migration),
        ]
    }
}
