use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, dummy_todos, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- root ---

#[tokio::test]
async fn root_says_hello() {
    let resp = app().oneshot(get_request("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Hello World");
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(get_request("/api/todo/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn list_todos_returns_seed_in_order() {
    let resp = app_with(dummy_todos())
        .oneshot(get_request("/api/todo/"))
        .await
        .unwrap();

    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, dummy_todos());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/todo/new_todo/",
            r#"{"title":"Buy milk","description":"","completed":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_accepts_empty_title() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo/new_todo/", r#"{"title":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.title, "");
}

#[tokio::test]
async fn create_todo_continues_after_seeded_ids() {
    let resp = app_with(dummy_todos())
        .oneshot(json_request("POST", "/api/todo/new_todo/", r#"{"title":"Next"}"#))
        .await
        .unwrap();

    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 4);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo/new_todo/", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_route_rejects_post() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo/", r#"{"title":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- create then list ---

#[tokio::test]
async fn create_then_list() {
    use tower::Service;

    let mut app = app().into_service();

    for title in ["first", "second"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/api/todo/new_todo/",
                &format!(r#"{{"title":"{title}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/todo/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[1].id, 2);
}
