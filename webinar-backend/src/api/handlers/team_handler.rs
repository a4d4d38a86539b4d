// webinar-backend/src/api/handlers/team_handler.rs

use crate::api::dto::common::{ApiResponse, PaginationQuery};
use crate::api::dto::team_dto::*;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::service::team_service::{EWebinar, EWebinarSet, Presenter, TeamUserRelation};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

// Helper function to handle validation errors
fn handle_validation_error(err: validator::ValidationErrors) -> AppError {
    let messages: Vec<String> = err
        .field_errors()
        .iter()
        .flat_map(|(_, errors)| {
            errors
                .iter()
                .filter_map(|e| e.message.clone().map(|m| m.to_string()))
        })
        .collect();

    if messages.is_empty() {
        AppError::ValidationError("Validation failed".to_string())
    } else {
        AppError::ValidationErrors(messages)
    }
}

/// チーム作成
pub async fn create_team_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<TeamResponse>>)> {
    // バリデーション
    payload.validate().map_err(handle_validation_error)?;

    let team_response = app_state.team_service.create_team(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Team created successfully",
            team_response,
        )),
    ))
}

/// チーム詳細取得
pub async fn get_team_handler(
    State(app_state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<TeamResponse>>> {
    let team_response = app_state.team_service.get_team_by_id(team_id).await?;

    Ok(Json(ApiResponse::success(
        "Team retrieved successfully",
        team_response,
    )))
}

/// チーム一覧取得
pub async fn list_teams_handler(
    State(app_state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<TeamPaginationResponse>>> {
    let teams = app_state.team_service.get_teams(query).await?;

    Ok(Json(ApiResponse::success(
        "Teams retrieved successfully",
        teams,
    )))
}

/// チーム更新
pub async fn update_team_handler(
    State(app_state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<TeamInput>,
) -> AppResult<Json<ApiResponse<TeamResponse>>> {
    // バリデーション
    payload.validate().map_err(handle_validation_error)?;

    let team_response = app_state.team_service.update_team(team_id, payload).await?;

    Ok(Json(ApiResponse::success(
        "Team updated successfully",
        team_response,
    )))
}

/// チーム削除
pub async fn delete_team_handler(
    State(app_state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    app_state.team_service.delete_team(team_id).await?;

    Ok((
        StatusCode::NO_CONTENT,
        Json(json!({
            "success": true,
            "message": "Team deleted successfully"
        })),
    ))
}

// --- リレーション取得ハンドラー ---
// 各コレクションは独立したエンドポイントとして遅延取得される。

/// チームのウェビナー一覧取得
pub async fn list_team_ewebinars_handler(
    State(app_state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<EWebinar>>>> {
    let ewebinars = app_state.team_service.get_ewebinars(team_id).await?;

    Ok(Json(ApiResponse::success(
        "Webinars retrieved successfully",
        ewebinars,
    )))
}

/// チームのメンバーシップ一覧取得
pub async fn list_team_users_handler(
    State(app_state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<TeamUserRelation>>>> {
    let relations = app_state.team_service.get_user_relations(team_id).await?;

    Ok(Json(ApiResponse::success(
        "Team users retrieved successfully",
        relations,
    )))
}

/// チームのウェビナーセット一覧取得
pub async fn list_team_sets_handler(
    State(app_state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<EWebinarSet>>>> {
    let sets = app_state.team_service.get_sets(team_id).await?;

    Ok(Json(ApiResponse::success(
        "Webinar sets retrieved successfully",
        sets,
    )))
}

/// チームのプレゼンター一覧取得
pub async fn list_team_presenters_handler(
    State(app_state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<Presenter>>>> {
    let presenters = app_state.team_service.get_presenters(team_id).await?;

    Ok(Json(ApiResponse::success(
        "Presenters retrieved successfully",
        presenters,
    )))
}

// --- ルーター ---

/// チームルーターを作成
pub fn team_router(app_state: AppState) -> Router {
    Router::new()
        // チーム管理
        .route("/teams", post(create_team_handler))
        .route("/teams", get(list_teams_handler))
        .route("/teams/{id}", get(get_team_handler))
        .route("/teams/{id}", patch(update_team_handler))
        .route("/teams/{id}", delete(delete_team_handler))
        // リレーションの遅延取得
        .route("/teams/{id}/ewebinars", get(list_team_ewebinars_handler))
        .route("/teams/{id}/users", get(list_team_users_handler))
        .route("/teams/{id}/sets", get(list_team_sets_handler))
        .route("/teams/{id}/presenters", get(list_team_presenters_handler))
        .with_state(app_state)
}
