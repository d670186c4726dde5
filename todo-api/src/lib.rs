//! Todo サービスの HTTP API（axum）
//!
//! ルーティングとアプリ状態の組み立てのみを担当し、各エンドポイントの
//! 処理は `handlers`、永続化は `store` に委譲します。
//! ストアは差し替え可能で、テストではインメモリ実装を注入します。

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::store::TodoStore;

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// ルータを構築して返します。
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/:id",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(state)
}
