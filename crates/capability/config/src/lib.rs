//! 应用运行配置加载。

use std::env;

/// 连接池默认上限。
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 8;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 存储后端。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL（JSONB 文档）
    Postgres,
    /// 进程内存（重启丢失，仅用于演示与测试）
    Memory,
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// 从环境变量读取配置。
    ///
    /// - `PORT`：监听端口（默认 3000）
    /// - `SENRA_HOST`：监听地址（默认 0.0.0.0）
    /// - `SENRA_STORAGE`：`postgres` | `memory`（默认 postgres）
    /// - `SENRA_DATABASE_URL`：postgres 后端必填
    /// - `SENRA_DB_MAX_CONNECTIONS`：连接池上限（默认 8）
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("SENRA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = read_u16_with_default("PORT", 3000)?;
        let storage = read_storage_backend("SENRA_STORAGE")?;
        let database_url = read_optional("SENRA_DATABASE_URL");
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("SENRA_DATABASE_URL".to_string()));
        }
        let db_max_connections = read_u32_with_default(
            "SENRA_DB_MAX_CONNECTIONS",
            DEFAULT_DB_MAX_CONNECTIONS,
        )?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "SENRA_DB_MAX_CONNECTIONS".to_string(),
                "0".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            storage,
            database_url,
            db_max_connections,
        })
    }

    /// 监听地址（host:port）。
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_storage_backend(key: &str) -> Result<StorageBackend, ConfigError> {
    let value = match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => return Ok(StorageBackend::Postgres),
    };
    match value.to_ascii_lowercase().as_str() {
        "postgres" | "postgresql" | "pg" => Ok(StorageBackend::Postgres),
        "memory" | "in-memory" => Ok(StorageBackend::Memory),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}

fn read_u16_with_default(key: &str, default: u16) -> Result<u16, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u16>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_u32_with_default(key: &str, default: u32) -> Result<u32, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
