//! SenRa 消息服务入口：加载配置、建立存储、启动 HTTP 服务。

use senra_api::{AppState, build_router};
use senra_config::{AppConfig, ConfigError, StorageBackend};
use senra_storage::{InMemoryMessageStore, MessageStore, PgMessageStore};
use senra_telemetry::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let store: Arc<dyn MessageStore> = match config.storage {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| ConfigError::Missing("SENRA_DATABASE_URL".to_string()))?;
            let store = PgMessageStore::connect(database_url, config.db_max_connections).await?;
            tracing::info!("connected to postgres");
            Arc::new(store)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, messages are lost on restart");
            Arc::new(InMemoryMessageStore::new())
        }
    };

    let app = build_router(AppState::new(store));

    let addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
