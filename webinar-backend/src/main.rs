// src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use webinar_backend::api::handlers::team_handler::team_router;
use webinar_backend::api::AppState;
use webinar_backend::config::Config;
use webinar_backend::db::create_db_pool;
use webinar_backend::repository::team_repository::TeamRepository;
use webinar_backend::service::payment_setup_service::PaymentSetupService;
use webinar_backend::service::team_service::TeamService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webinar_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Webinar Backend server...");

    // 設定を読み込む
    let app_config = Config::from_env().expect("Failed to load configuration");

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Database pool created successfully.");

    // サービスの作成
    let payment_setup_service = Arc::new(PaymentSetupService::new(
        app_config.payment_development_mode,
    ));
    let team_service = Arc::new(TeamService::new(
        TeamRepository::new(db_pool),
        payment_setup_service,
    ));

    // ルーターの設定
    let app_state = AppState::new(team_service);
    let app_router = team_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // サーバーの起動
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr
    );

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
