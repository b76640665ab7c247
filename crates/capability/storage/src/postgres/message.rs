//! Postgres 消息存储实现
//!
//! 消息以 JSONB 文档形式存放在 `senra_messages.doc` 中：
//! - 创建：存储层生成 UUID，整条记录写入文档
//! - 更新：`doc || patch` 合并已提供的字段（显式 null 写入 null，读取时视为未设置）；
//!   未提供任何字段时不写库，直接返回当前记录
//! - 删除：`returning doc` 返回删除前的记录
//!
//! 每个操作都是单条 SQL，使用参数化查询。

use crate::connection::{connect_pool, ensure_schema};
use crate::error::StorageError;
use crate::traits::MessageStore;
use crate::validation::parse_message_id;
use domain::{Message, MessageFields, MessageId};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

pub struct PgMessageStore {
    pub pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 通过数据库 URL 建立连接池并确保表存在
    ///
    /// # 参数
    /// - `database_url`：Postgres 连接字符串
    /// - `max_connections`：连接池上限
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = connect_pool(database_url, max_connections).await?;
        ensure_schema(&pool).await?;
        Ok(Self { pool })
    }
}

fn message_from_row(row: &PgRow) -> Result<Message, StorageError> {
    let doc: serde_json::Value = row.try_get("doc")?;
    Ok(serde_json::from_value(doc)?)
}

#[async_trait::async_trait]
impl MessageStore for PgMessageStore {
    async fn create_message(&self, fields: MessageFields) -> Result<Message, StorageError> {
        let message = Message::create(MessageId::new(), fields);
        let row = sqlx::query(
            "insert into senra_messages (id, doc) values ($1, $2) returning doc",
        )
        .bind(*message.id.as_uuid())
        .bind(Json(&message))
        .fetch_one(&self.pool)
        .await?;
        message_from_row(&row)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StorageError> {
        let rows = sqlx::query("select doc from senra_messages order by seq")
            .fetch_all(&self.pool)
            .await?;
        let mut messages = Vec::with_capacity(rows.len());
        for row in rows {
            messages.push(message_from_row(&row)?);
        }
        Ok(messages)
    }

    async fn find_message(&self, id: &str) -> Result<Option<Message>, StorageError> {
        let id = parse_message_id(id)?;
        let row = sqlx::query("select doc from senra_messages where id = $1")
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(message_from_row(&row)?))
    }

    async fn update_message(
        &self,
        id: &str,
        fields: MessageFields,
    ) -> Result<Option<Message>, StorageError> {
        if fields.is_empty() {
            return self.find_message(id).await;
        }
        let id = parse_message_id(id)?;
        let patch = serde_json::to_value(&fields)?;
        let row = sqlx::query(
            "update senra_messages set doc = doc || $2 where id = $1 returning doc",
        )
        .bind(*id.as_uuid())
        .bind(Json(patch))
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(message_from_row(&row)?))
    }

    async fn delete_message(&self, id: &str) -> Result<Option<Message>, StorageError> {
        let id = parse_message_id(id)?;
        let row = sqlx::query("delete from senra_messages where id = $1 returning doc")
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(message_from_row(&row)?))
    }
}
