//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers：
//! - 健康检查：/health
//! - 消息列表：/senra-messages
//! - 消息创建：/senra-message
//! - 单条消息：/senra-message/{id}

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/senra-messages", get(list_messages))
        .route("/senra-message", post(create_message))
        .route(
            "/senra-message/:id",
            get(get_message).put(update_message).delete(delete_message),
        )
}
