//! 稳定的 API 响应契约。

use serde::Serialize;

/// 标准 API 响应封装。
///
/// 未设置的字段在 JSON 中省略：`{success, message?, data?, error?}`。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// 错误分类（封闭集合），决定错误码。
///
/// HTTP 状态码由路由决定：同为 `Persistence`，读/删返回 500，写入返回 400。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 标识对应的记录不存在。
    NotFound,
    /// 请求体无法解析或字段类型转换失败。
    ValidationOrCoercion,
    /// 存储层故障（连接、非法标识、数据损坏等）。
    Persistence,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "MESSAGE.NOT_FOUND",
            ErrorKind::ValidationOrCoercion => "INVALID.REQUEST",
            ErrorKind::Persistence => "STORAGE.ERROR",
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// 带提示信息的成功响应。
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(
        kind: ErrorKind,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error: Some(ApiError {
                code: kind.code().to_string(),
                message: detail.into(),
            }),
        }
    }
}
