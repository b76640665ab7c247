//! 输入验证辅助函数
//!
//! - decode_fields：将请求体转换为 `MessageFields`
//!
//! 字段类型转换在反序列化阶段完成（见 `domain::coerce`）。
//! 未声明 JSON Content-Type 或请求体为空时按空输入处理；
//! JSON 语法错误与类型转换失败转换为 400。

use crate::utils::response::bad_request_error;
use axum::{
    http::{HeaderMap, header},
    response::Response,
};
use domain::MessageFields;

/// 解析请求体，失败时返回带路由提示信息的 400 响应
pub fn decode_fields(
    headers: &HeaderMap,
    body: &[u8],
    message: &str,
) -> Result<MessageFields, Response> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(MessageFields::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        tracing::warn!(error = %err, "{message}");
        bad_request_error(message, err.to_string())
    })
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
}
