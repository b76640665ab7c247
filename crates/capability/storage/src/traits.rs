//! 存储接口 Trait 定义
//!
//! - MessageStore：消息存储（创建、列表、查询、更新、删除）
//!
//! 设计原则：
//! - 标识以原始字符串传入，由存储层解析（非法标识返回 `StorageError::InvalidId`）
//! - 记录不存在用 `Ok(None)` 表示，而不是错误
//! - 使用 async_trait 支持 `Arc<dyn MessageStore>` 动态分发

use crate::error::StorageError;
use async_trait::async_trait;
use domain::{Message, MessageFields};

/// 消息存储接口
///
/// 每次调用都是一次独立的存储往返，不做事务、批量或缓存。
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// 创建消息，标识由存储层生成
    async fn create_message(&self, fields: MessageFields) -> Result<Message, StorageError>;

    /// 列出全部消息（按插入顺序）
    async fn list_messages(&self) -> Result<Vec<Message>, StorageError>;

    /// 查找指定消息
    async fn find_message(&self, id: &str) -> Result<Option<Message>, StorageError>;

    /// 替换已提供的字段，返回更新后的记录
    async fn update_message(
        &self,
        id: &str,
        fields: MessageFields,
    ) -> Result<Option<Message>, StorageError>;

    /// 删除消息，返回删除前的记录
    async fn delete_message(&self, id: &str) -> Result<Option<Message>, StorageError>;
}
