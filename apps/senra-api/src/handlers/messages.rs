//! 消息 CRUD handlers
//!
//! 提供 SenRa 消息的增删改查接口：
//! - POST /senra-message - 创建消息
//! - GET /senra-messages - 列出消息
//! - GET /senra-message/{id} - 获取消息详情
//! - PUT /senra-message/{id} - 更新消息（部分字段）
//! - DELETE /senra-message/{id} - 删除消息
//!
//! 状态码约定：
//! - 写入（创建/更新）失败一律返回 400，无论原因是输入还是存储故障
//! - 读取/删除失败返回 500
//! - 记录不存在返回 404

use crate::AppState;
use crate::utils::response::{not_found_error, storage_error};
use crate::utils::validation::decode_fields;
use api_contract::ApiResponse;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

const CREATE_FAILED: &str = "Error saving message";
const LIST_FAILED: &str = "Error fetching messages";
const GET_FAILED: &str = "Error fetching message";
const UPDATE_FAILED: &str = "Error updating message";
const DELETE_FAILED: &str = "Error deleting message";

/// 创建消息
///
/// 请求体按字段类型转换为 `MessageFields`，标识由存储层生成。
///
/// # 流程
///
/// 1. 解析请求体（非 JSON 或空请求体视为空输入；JSON 解析或字段类型转换失败返回 400）
/// 2. 记录收到的数据
/// 3. 调用 `store.create_message` 保存
/// 4. 返回 `201 CREATED` 和保存后的记录（含 `_id`）
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 请求体非法，或存储层写入失败
pub async fn create_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let fields = match decode_fields(&headers, &body, CREATE_FAILED) {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    tracing::info!(payload = ?fields, "received data from senra");
    match state.store.create_message(fields).await {
        Ok(message) => (
            StatusCode::CREATED,
            Json(ApiResponse::success_with_message(
                "Message created successfully!",
                message,
            )),
        )
            .into_response(),
        Err(err) => storage_error(StatusCode::BAD_REQUEST, CREATE_FAILED, err),
    }
}

/// 列出消息
///
/// 空集合返回空数组，而不是错误。
pub async fn list_messages(State(state): State<AppState>) -> Response {
    match state.store.list_messages().await {
        Ok(messages) => {
            (StatusCode::OK, Json(ApiResponse::success(messages))).into_response()
        }
        Err(err) => storage_error(StatusCode::INTERNAL_SERVER_ERROR, LIST_FAILED, err),
    }
}

/// 获取消息详情
///
/// # 错误处理
///
/// - `404 NOT FOUND`: 消息不存在
/// - `500 INTERNAL SERVER ERROR`: 标识非法或存储层错误
pub async fn get_message(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.find_message(&id).await {
        Ok(Some(message)) => {
            (StatusCode::OK, Json(ApiResponse::success(message))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(StatusCode::INTERNAL_SERVER_ERROR, GET_FAILED, err),
    }
}

/// 更新消息
///
/// 只替换请求体中出现的字段；显式 `null` 清空字段；`_id` 不可修改。
/// 空输入不修改记录，返回当前记录。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 请求体非法、标识非法或存储层错误
/// - `404 NOT FOUND`: 消息不存在
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let fields = match decode_fields(&headers, &body, UPDATE_FAILED) {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    match state.store.update_message(&id, fields).await {
        Ok(Some(message)) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_message(
                "Message updated successfully!",
                message,
            )),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(StatusCode::BAD_REQUEST, UPDATE_FAILED, err),
    }
}

/// 删除消息
///
/// 成功时返回删除前的记录。
pub async fn delete_message(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.delete_message(&id).await {
        Ok(Some(message)) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_message(
                "Message deleted successfully!",
                message,
            )),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED, err),
    }
}
