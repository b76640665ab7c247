//! 验证辅助函数
//!
//! - parse_message_id：将路径参数解析为 `MessageId`
//!
//! 标识格式由存储层决定，调用方只传入原始字符串。

use crate::error::StorageError;
use domain::MessageId;

/// 解析消息标识
///
/// 无法解析时返回 `StorageError::InvalidId`。
pub fn parse_message_id(id: &str) -> Result<MessageId, StorageError> {
    id.parse::<MessageId>()
        .map_err(|_| StorageError::InvalidId(id.to_string()))
}
