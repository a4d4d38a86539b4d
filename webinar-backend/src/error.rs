// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// このAPIが返すエラーの種類
///
/// バリデーション・競合・不在はいずれも書き込み前に検出され、
/// ストレージ障害は永続化層からそのまま伝播する。
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message, errors) = match self {
            AppError::DbErr(db_err) => {
                tracing::error!("Database error: {:?}", db_err); // サーバーログには詳細を出す

                // 行が消えた後の更新だけは404として返す
                let status = match db_err {
                    DbErr::RecordNotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };

                (
                    status,
                    "database_error",
                    "A database error occurred".to_string(),
                    None,
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message, None),
            AppError::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, "validation_error", message, None)
            }
            AppError::ValidationErrors(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_errors",
                "Validation failed".to_string(),
                Some(errors),
            ),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "bad_request", message, None)
            }
            AppError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message, None),
            AppError::ExternalServiceError(message) => {
                tracing::error!("External service error: {}", message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "external_service_error",
                    message,
                    None,
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            message,
            error_type: error_type.to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
///
/// error_type によってプレゼンテーション層がフィールド単位の
/// メッセージに振り分けられる。
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinct() {
        let conflict = AppError::Conflict("subdomain: already taken".to_string());
        let validation = AppError::ValidationError("subdomain: malformed".to_string());
        let not_found = AppError::NotFound("Team not found".to_string());

        assert!(matches!(conflict, AppError::Conflict(_)));
        assert!(matches!(validation, AppError::ValidationError(_)));
        assert!(matches!(not_found, AppError::NotFound(_)));
    }

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (
                AppError::NotFound("x".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::ValidationError("x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::ValidationErrors(vec!["x".to_string()]),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::BadRequest("x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::Conflict("x".to_string()), StatusCode::CONFLICT),
            (
                AppError::ExternalServiceError("x".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::DbErr(DbErr::Custom("x".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_db_err_propagates_unchanged() {
        let db_err = DbErr::Custom("connection reset".to_string());
        let err: AppError = db_err.into();
        match err {
            AppError::DbErr(DbErr::Custom(msg)) => assert_eq!(msg, "connection reset"),
            other => panic!("expected DbErr, got {:?}", other),
        }
    }
}
