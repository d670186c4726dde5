//! Todo コレクションストアの抽象
//!
//! DynamoDB / インメモリの 2 実装が同一の契約を満たします。
//! どの実装でも各操作は単一レコード粒度で原子的です。

pub mod dynamodb;
pub mod memory;

pub use dynamodb::DynamoTodoStore;
pub use memory::InMemoryTodoStore;

use async_trait::async_trait;
use thiserror::Error;
use todo_domain::{Todo, TodoId};

/// ストア層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// 選択中のバックエンドの識別子形式に合わない
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// 該当レコードなし
    #[error("record not found")]
    NotFound,

    /// 接続断・操作失敗（リトライしない）
    #[error("backend error: {0}")]
    Backend(String),
}

/// 作成入力（識別子はバックエンドが採番するため持たない）
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub body: String,
    pub completed: bool,
}

/// 部分更新パッチ
///
/// `body` は値が与えられたときのみ書き換え、`completed` は常に
/// パッチの値で上書きします（ワイヤ形式に「フィールド有無」の
/// 区別がないため、省略時は false として届きます）。
#[derive(Debug, Clone)]
pub struct TodoPatch {
    pub body: Option<String>,
    pub completed: bool,
}

/// Todo コレクションストアの最小抽象
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// 全件をストア定義の順序で返します。
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// 採番して永続化し、保存後のレコードを返します。
    async fn create(&self, new: NewTodo) -> Result<Todo, StoreError>;

    /// 単一レコードを取得します。
    async fn get(&self, id: &TodoId) -> Result<Todo, StoreError>;

    /// 部分更新し、更新後のレコードを返します。
    async fn update(&self, id: &TodoId, patch: TodoPatch) -> Result<Todo, StoreError>;

    /// レコードを削除します。
    async fn delete(&self, id: &TodoId) -> Result<(), StoreError>;
}
