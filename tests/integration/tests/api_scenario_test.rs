use axum::http::StatusCode;
use integration_tests::{empty_request, json_request, memory_app, response_json, send};

/// 作成 → 一覧 → 完了 → 削除の一連の流れを HTTP 境界越しに検証
#[tokio::test]
async fn full_crud_lifecycle_over_http() {
    let app = memory_app();

    // 作成
    let response = send(
        &app,
        json_request("POST", "/api/todos", serde_json::json!({"body": "Buy milk"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["completed"], false);

    // 一覧に含まれる
    let response = send(&app, empty_request("GET", "/api/todos")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = response_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], id.as_str());

    // 完了に更新（body は不変）
    let response = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/todos/{id}"),
            serde_json::json!({"completed": true}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["message"], "Todo updated successfully");
    assert_eq!(updated["todo"]["completed"], true);
    assert_eq!(updated["todo"]["body"], "Buy milk");

    // 削除
    let response = send(&app, empty_request("DELETE", &format!("/api/todos/{id}"))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // 一覧から消えている
    let response = send(&app, empty_request("GET", "/api/todos")).await;
    let list = response_json(response).await;
    assert!(list.as_array().unwrap().is_empty());
}

/// 検証エラーと未存在 id のエラーパス
#[tokio::test]
async fn validation_and_not_found_paths() {
    let app = memory_app();

    // 空 body の作成は 400 で、コレクションは増えない
    let response = send(
        &app,
        json_request("POST", "/api/todos", serde_json::json!({"body": "  "})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = response_json(response).await;
    assert_eq!(error["error"], "Todo body cannot be empty");

    let response = send(&app, empty_request("GET", "/api/todos")).await;
    assert!(response_json(response).await.as_array().unwrap().is_empty());

    // 存在しない id への更新・削除は 404
    let response = send(
        &app,
        json_request(
            "PATCH",
            "/api/todos/7",
            serde_json::json!({"completed": true}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, empty_request("DELETE", "/api/todos/7")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // 不正な形式の id は 404 より先に 400 になる
    let response = send(&app, empty_request("DELETE", "/api/todos/not-a-number")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
