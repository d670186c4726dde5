//! 各エンドポイントの処理
//!
//! HTTP 層の仕事は 3 つだけです: 入力の復号と検証、ストア呼び出し 1 回、
//! 結果の JSON/ステータスへの変換。

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use todo_domain::TodoId;

use crate::error::ApiError;
use crate::models::{CreateTodoRequest, UpdateTodoRequest, UpdateTodoResponse};
use crate::store::{NewTodo, TodoPatch};
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

/// ヘルスチェック用ハンドラ
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// 全件一覧（副作用なし）
pub async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// Todo 作成
///
/// 非空 body の検証はストアではなくここで行います。
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if input.body.trim().is_empty() {
        return Err(ApiError::Validation("Todo body cannot be empty".to_string()));
    }

    let todo = state
        .store
        .create(NewTodo {
            body: input.body,
            completed: input.completed,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// 単一 Todo 取得
pub async fn get_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state.store.get(&TodoId::from_raw(id)).await?;
    Ok(Json(todo))
}

/// 単一 Todo 更新（部分更新）
///
/// 空文字列の body は「未指定」と同じ扱いで、据え置きます。
pub async fn update_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(input): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let patch = TodoPatch {
        body: input.body.filter(|b| !b.trim().is_empty()),
        completed: input.completed,
    };

    let todo = state.store.update(&TodoId::from_raw(id), patch).await?;

    Ok(Json(UpdateTodoResponse {
        message: "Todo updated successfully".to_string(),
        todo,
    }))
}

/// 単一 Todo 削除
pub async fn delete_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete(&TodoId::from_raw(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
