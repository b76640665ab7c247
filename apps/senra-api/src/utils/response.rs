//! HTTP 响应辅助函数
//!
//! 提供统一的错误响应构造函数：
//! - not_found_error：记录不存在（404）
//! - bad_request_error：请求体非法（400）
//! - storage_error：存储层错误（状态码由路由决定）
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - 错误码来自封闭的 `ErrorKind`
//! - 底层驱动错误只写日志，不原样返回给客户端

use api_contract::{ApiResponse, ErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use senra_storage::StorageError;

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(
            ErrorKind::NotFound,
            "Message not found",
            "no message matches the given id",
        )),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: &str, detail: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(
            ErrorKind::ValidationOrCoercion,
            message,
            detail,
        )),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(status: StatusCode, message: &str, err: StorageError) -> Response {
    tracing::error!(error = %err, "{message}");
    (
        status,
        Json(ApiResponse::error(
            ErrorKind::Persistence,
            message,
            client_detail(&err),
        )),
    )
        .into_response()
}

fn client_detail(err: &StorageError) -> String {
    match err {
        StorageError::InvalidId(_) | StorageError::Unavailable(_) => err.to_string(),
        StorageError::Backend(_) => "storage backend failure".to_string(),
        StorageError::Corrupt(_) => "corrupt message document".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::client_detail;
    use senra_storage::StorageError;

    #[test]
    fn backend_detail_is_not_echoed() {
        let err = StorageError::Backend("password authentication failed".to_string());
        assert_eq!(client_detail(&err), "storage backend failure");
    }

    #[test]
    fn invalid_id_is_echoed() {
        let err = StorageError::InvalidId("abc".to_string());
        assert_eq!(client_detail(&err), "invalid message id: abc");
    }
}
