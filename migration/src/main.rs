// migration/src/main.rs

use migration::Migrator;
use sea_orm_migration::prelude::*;

#[async_std::main]
async fn main() {
    // sea-orm-migration が提供するコマンドラインインターフェースを実行
    cli::run_cli(Migrator).await;
}
