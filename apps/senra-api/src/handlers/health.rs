use api_contract::ApiResponse;
use axum::{Json, response::IntoResponse};

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({ "ok": true })))
}
