use serde::{Deserialize, Serialize};
use todo_domain::Todo;

/// POST /api/todos リクエスト
///
/// クライアントが `id` を送ってきても無視します（採番はバックエンド）。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

/// PATCH /api/todos/:id リクエスト
///
/// `completed` の省略は false と区別できないため、省略時は false 扱い。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub body: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// PATCH /api/todos/:id レスポンス（エンベロープ形式）
#[derive(Debug, Serialize)]
pub struct UpdateTodoResponse {
    pub message: String,
    pub todo: Todo,
}
