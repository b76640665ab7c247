//! # PostgreSQL 存储实现模块
//!
//! 生产环境使用的 `MessageStore` 实现。
//!
//! ## 数据库模式
//!
//! - `senra_messages`：消息表（seq, id, doc, created_at）
//!   - `id`：消息标识（uuid 主键）
//!   - `doc`：消息文档（jsonb），包含 `_id` 及全部已设置字段
//!   - `seq`：插入序号，列表按此排序
//!
//! 表结构由 [`crate::connection::ensure_schema`] 在启动时创建。
//!
//! ## 错误处理
//!
//! - `sqlx::Error` 转换为 `StorageError::Backend`
//! - 文档无法解析为 `Message` 时返回 `StorageError::Corrupt`
//! - 记录不存在返回 `Ok(None)`
//!
//! 当前实现不使用事务：每个操作都是单条语句。

pub mod message;

pub use message::*;
