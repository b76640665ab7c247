//! 消息内存存储实现
//!
//! 用于测试和本地演示（`SENRA_STORAGE=memory`）。
//!
//! 功能：
//! - 消息 CRUD 操作
//! - 列表按插入顺序返回

use crate::error::StorageError;
use crate::traits::MessageStore;
use crate::validation::parse_message_id;
use domain::{Message, MessageFields, MessageId};
use std::sync::RwLock;

/// 消息内存存储
///
/// 使用 RwLock + Vec 提供线程安全的内存存储，锁不会跨越 `.await` 持有。
pub struct InMemoryMessageStore {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageStore {
    /// 创建新的消息存储
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create_message(&self, fields: MessageFields) -> Result<Message, StorageError> {
        let message = Message::create(MessageId::new(), fields);
        let mut items = self
            .messages
            .write()
            .map_err(|_| StorageError::Unavailable("lock failed".to_string()))?;
        items.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StorageError> {
        let items = self
            .messages
            .read()
            .map_err(|_| StorageError::Unavailable("lock failed".to_string()))?;
        Ok(items.clone())
    }

    async fn find_message(&self, id: &str) -> Result<Option<Message>, StorageError> {
        let id = parse_message_id(id)?;
        let items = self
            .messages
            .read()
            .map_err(|_| StorageError::Unavailable("lock failed".to_string()))?;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn update_message(
        &self,
        id: &str,
        fields: MessageFields,
    ) -> Result<Option<Message>, StorageError> {
        let id = parse_message_id(id)?;
        let mut items = self
            .messages
            .write()
            .map_err(|_| StorageError::Unavailable("lock failed".to_string()))?;
        let Some(message) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        message.apply(fields);
        Ok(Some(message.clone()))
    }

    async fn delete_message(&self, id: &str) -> Result<Option<Message>, StorageError> {
        let id = parse_message_id(id)?;
        let mut items = self
            .messages
            .write()
            .map_err(|_| StorageError::Unavailable("lock failed".to_string()))?;
        match items.iter().position(|item| item.id == id) {
            Some(index) => Ok(Some(items.remove(index))),
            None => Ok(None),
        }
    }
}
