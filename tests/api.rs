use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use poem::{
    Endpoint,
    http::StatusCode,
    test::{TestClient, TestResponse},
};
use serde_json::{Value, json};
use todos::{
    infrastructure::repositories::in_memory::{InMemoryTodoRepository, InMemoryUserRepository},
    presentation::http::endpoints::root::ApiState,
};

fn client() -> TestClient<impl Endpoint> {
    let state = ApiState::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    );
    TestClient::new(todos::build_app(Arc::new(state), "http://localhost:8000".to_string()))
}

async fn body(resp: TestResponse) -> Value {
    resp.0.into_body().into_json::<Value>().await.unwrap()
}

fn timestamp(value: &Value) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let cli = client();

    let resp = cli.get("/health").send().await;

    resp.assert_status_is_ok();
    resp.assert_text("OK").await;
}

#[tokio::test]
async fn create_then_patch_status_keeps_title() {
    let cli = client();

    let resp = cli
        .post("/v1/todos")
        .body_json(&json!({"title": "Buy milk", "status": "pending"}))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let created = body(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["status"], "pending");
    assert_eq!(created["created_at"], created["updated_at"]);
    assert!(created.get("user_id").is_none());

    tokio::time::sleep(Duration::from_millis(5)).await;

    let resp = cli
        .patch("/v1/todos/1")
        .body_json(&json!({"status": "done"}))
        .send()
        .await;
    resp.assert_status_is_ok();
    let patched = body(resp).await;
    assert_eq!(patched["id"], 1);
    assert_eq!(patched["title"], "Buy milk");
    assert_eq!(patched["status"], "done");
    assert_eq!(patched["created_at"], created["created_at"]);
    assert!(timestamp(&patched["updated_at"]) > timestamp(&created["updated_at"]));
}

#[tokio::test]
async fn put_requires_both_fields_and_replaces_them() {
    let cli = client();
    cli.post("/v1/todos")
        .body_json(&json!({"title": "Buy milk", "status": "pending"}))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli
        .put("/v1/todos/1")
        .body_json(&json!({"title": "Buy bread"}))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(body(resp).await["detail"].is_string());

    let resp = cli
        .put("/v1/todos/1")
        .body_json(&json!({"title": "Buy bread", "status": "done"}))
        .send()
        .await;
    resp.assert_status_is_ok();
    let replaced = body(resp).await;
    assert_eq!(replaced["title"], "Buy bread");
    assert_eq!(replaced["status"], "done");
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let cli = client();

    cli.post("/v1/todos")
        .body_json(&json!({"title": "", "status": "pending"}))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let resp = cli.get("/v1/todos").send().await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await, json!([]));
}

#[tokio::test]
async fn missing_todo_reports_detail() {
    let cli = client();

    for resp in [
        cli.get("/v1/todos/9").send().await,
        cli.patch("/v1/todos/9")
            .body_json(&json!({"status": "done"}))
            .send()
            .await,
        cli.delete("/v1/todos/9").send().await,
    ] {
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await, json!({"detail": "Todo is not found"}));
    }
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let cli = client();

    let resp = cli.get("/v1/todos/abc").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let detail = body(resp).await["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("todo_id"), "{detail}");

    let resp = cli.get("/v2/users/abc/todos").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let detail = body(resp).await["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("user_id"), "{detail}");
}

#[tokio::test]
async fn malformed_body_reports_detail() {
    let cli = client();

    let resp = cli
        .post("/v1/todos")
        .body_json(&json!({"title": "x"}))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(body(resp).await["detail"].is_string());
}

#[tokio::test]
async fn unknown_route_reports_detail() {
    let cli = client();

    let resp = cli.get("/v3/todos").send().await;

    resp.assert_status(StatusCode::NOT_FOUND);
    assert!(body(resp).await["detail"].is_string());
}

#[tokio::test]
async fn delete_removes_todo() {
    let cli = client();
    cli.post("/v1/todos")
        .body_json(&json!({"title": "Buy milk", "status": "pending"}))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    cli.delete("/v1/todos/1")
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);

    cli.get("/v1/todos/1")
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    cli.delete("/v1/todos/1")
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let cli = client();
    let resp = cli
        .post("/v2/users")
        .body_json(&json!({"name": "Ada", "email": "ada@example.com"}))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let user = body(resp).await;
    assert_eq!(user["id"], 1);
    assert_eq!(user["todos"], json!([]));

    let resp = cli
        .post("/v2/users")
        .body_json(&json!({"name": "Someone else", "email": "ada@example.com"}))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(body(resp).await, json!({"detail": "Email is already in use"}));

    let users = body(cli.get("/v2/users").send().await).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn user_update_and_delete() {
    let cli = client();
    for (name, email) in [("Ada", "ada@example.com"), ("Grace", "grace@example.com")] {
        cli.post("/v2/users")
            .body_json(&json!({"name": name, "email": email}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
    }

    let resp = cli
        .patch("/v2/users/2")
        .body_json(&json!({"email": "ada@example.com"}))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(body(resp).await, json!({"detail": "Email is already in use"}));

    let resp = cli
        .put("/v2/users/2")
        .body_json(&json!({"name": "Grace Hopper", "email": "grace@example.com"}))
        .send()
        .await;
    resp.assert_status_is_ok();
    let user = body(resp).await;
    assert_eq!(user["name"], "Grace Hopper");
    assert_eq!(user["email"], "grace@example.com");

    cli.delete("/v2/users/2")
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let resp = cli.get("/v2/users/2").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(body(resp).await, json!({"detail": "User is not found"}));
}

#[tokio::test]
async fn nested_todos_are_scoped_to_their_owner() {
    let cli = client();
    for (name, email) in [("Ada", "ada@example.com"), ("Grace", "grace@example.com")] {
        cli.post("/v2/users")
            .body_json(&json!({"name": name, "email": email}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
    }

    let resp = cli
        .post("/v2/users/1/todos")
        .body_json(&json!({"title": "Write notes", "status": "pending"}))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    assert_eq!(body(resp).await["id"], 1);

    cli.get("/v2/users/1/todos/1")
        .send()
        .await
        .assert_status_is_ok();

    let resp = cli.get("/v2/users/2/todos/1").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(body(resp).await, json!({"detail": "Todo is not found"}));

    cli.patch("/v2/users/2/todos/1")
        .body_json(&json!({"status": "done"}))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    cli.delete("/v2/users/2/todos/1")
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let owned = body(cli.get("/v2/users/1/todos").send().await).await;
    assert_eq!(owned.as_array().unwrap().len(), 1);
    let others = body(cli.get("/v2/users/2/todos").send().await).await;
    assert_eq!(others, json!([]));

    let user = body(cli.get("/v2/users/1").send().await).await;
    assert_eq!(user["todos"][0]["title"], "Write notes");

    // nested todos are still part of the flat collection
    let flat = body(cli.get("/v1/todos").send().await).await;
    assert_eq!(flat.as_array().unwrap().len(), 1);

    let resp = cli
        .put("/v2/users/1/todos/1")
        .body_json(&json!({"title": "Write more notes", "status": "done"}))
        .send()
        .await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await["status"], "done");

    cli.delete("/v2/users/1/todos/1")
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn deleting_a_user_keeps_its_todos() {
    let cli = client();
    cli.post("/v2/users")
        .body_json(&json!({"name": "Ada", "email": "ada@example.com"}))
        .send()
        .await
        .assert_status(StatusCode::CREATED);
    cli.post("/v2/users/1/todos")
        .body_json(&json!({"title": "Write notes", "status": "pending"}))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    cli.delete("/v2/users/1")
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);

    cli.get("/v1/todos/1").send().await.assert_status_is_ok();
    let orphaned = body(cli.get("/v2/users/1/todos").send().await).await;
    assert_eq!(orphaned.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn nested_create_under_unknown_user_is_allowed() {
    let cli = client();

    cli.post("/v2/users/42/todos")
        .body_json(&json!({"title": "Write notes", "status": "pending"}))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let owned = body(cli.get("/v2/users/42/todos").send().await).await;
    assert_eq!(owned.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn created_user_embeds_todos_already_filed_under_its_id() {
    let cli = client();
    cli.post("/v2/users/1/todos")
        .body_json(&json!({"title": "Write notes", "status": "pending"}))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli
        .post("/v2/users")
        .body_json(&json!({"name": "Ada", "email": "ada@example.com"}))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let created = body(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["todos"][0]["title"], "Write notes");

    let fetched = body(cli.get("/v2/users/1").send().await).await;
    assert_eq!(created["todos"], fetched["todos"]);
}
