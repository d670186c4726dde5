//! 環境変数からの設定読み込み
//!
//! 設定は起動時に一度だけ読み、以後は不変です。
//! 不正な値は起動失敗（プロセス終了）として扱われます。

use std::env;

use thiserror::Error;

/// ストアバックエンドの選択
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    DynamoDb,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("unknown TODO_BACKEND: {0} (expected \"memory\" or \"dynamodb\")")]
    UnknownBackend(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend: BackendKind,
    pub table_name: String,
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        let backend = match env::var("TODO_BACKEND") {
            Ok(raw) => match raw.as_str() {
                "memory" => BackendKind::Memory,
                "dynamodb" => BackendKind::DynamoDb,
                _ => return Err(ConfigError::UnknownBackend(raw)),
            },
            Err(_) => BackendKind::Memory,
        };

        Ok(Config {
            port,
            backend,
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "todo-table".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }
}
