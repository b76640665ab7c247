//! 数据库连接管理
//!
//! 提供数据库连接池初始化与表结构定义：
//! - connect_pool：建立 Postgres 连接池
//! - ensure_schema：创建 `senra_messages` 表（如不存在）
//!
//! 设计原则：
//! - 连接池在进程启动时建立一次，进程内共享
//! - 消息以 JSONB 文档存储，`seq` 保持插入顺序

use crate::error::StorageError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// 建立 Postgres 连接池
///
/// # 参数
/// - `database_url`：Postgres 连接字符串
/// - `max_connections`：连接池上限
///
/// # 返回
/// - `Result<PgPool, StorageError>`：连接池或错误
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// 创建消息表（幂等）
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        "create table if not exists senra_messages ( \
             seq bigserial not null, \
             id uuid primary key, \
             doc jsonb not null, \
             created_at timestamptz not null default now() \
         )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "create unique index if not exists idx_senra_messages_seq on senra_messages (seq)",
    )
    .execute(pool)
    .await?;
    Ok(())
}
