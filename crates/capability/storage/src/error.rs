//! 存储层错误类型
//!
//! 定义统一的存储错误类型，用于封装底层错误：
//! - 非法标识（无法解析为消息 ID）
//! - SQL 执行与连接错误
//! - 文档内容无法还原为 `Message`

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 标识格式非法。
    #[error("invalid message id: {0}")]
    InvalidId(String),
    /// 数据库执行失败（连接中断、语句错误等）。
    #[error("storage backend failure: {0}")]
    Backend(String),
    /// 存储的文档无法解析。
    #[error("corrupt message document: {0}")]
    Corrupt(String),
    /// 存储不可用（锁中毒等）。
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}
