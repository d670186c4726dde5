//! todo-api バイナリのエントリポイント
//! 設定を読み込み、選択されたバックエンドで HTTP サーバを起動します。

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::config::{BackendKind, Config};
use todo_api::store::{DynamoTodoStore, InMemoryTodoStore, TodoStore};
use todo_api::{app_with_state, AppState};

#[tokio::main]
async fn main() {
    // 簡易なロガー設定（RUST_LOG 環境変数で制御可能）
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定不備・バックエンド到達不能は起動時に致命的エラーとする
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn TodoStore> = match config.backend {
        BackendKind::Memory => Arc::new(InMemoryTodoStore::default()),
        BackendKind::DynamoDb => match DynamoTodoStore::connect(&config.table_name).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(error = %e, table = %config.table_name, "DynamoDB unreachable");
                std::process::exit(1);
            }
        },
    };

    // CORS は設定された単一オリジンと 4 メソッドのみ許可
    let origin: HeaderValue = match config.allowed_origin.parse() {
        Ok(o) => o,
        Err(_) => {
            tracing::error!(origin = %config.allowed_origin, "invalid ALLOWED_ORIGIN");
            std::process::exit(1);
        }
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    let router = app_with_state(AppState::new(store))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!(%addr, "server starting");

    axum::serve(listener, router)
        .await
        .expect("server error");
}
