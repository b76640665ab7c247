//! SenRa 消息 HTTP API（HTTP Request Router）。
//!
//! 路由将请求直接映射到 `MessageStore` 操作，并以统一的
//! `ApiResponse` 封装返回。存储句柄在启动时显式构造后注入 `AppState`，
//! 测试中可替换为内存实现或故障替身。

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use axum::Router;
use senra_storage::MessageStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// 路由共享状态。
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}

/// 构建完整应用：API 路由 + 请求上下文 + 跨域（允许任意来源）。
pub fn build_router(state: AppState) -> Router {
    routes::create_api_router()
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::request_context))
        .layer(CorsLayer::permissive())
}
