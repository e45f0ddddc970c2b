//! Stand-in for the todo HTTP API the client talks to.
//!
//! Serves the collection and creation endpoints from an in-memory store.
//! Ids are sequential integers assigned at creation.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Default)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

/// Router over an empty store.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router over a store seeded with `todos`. New ids continue after the
/// largest seeded id.
pub fn app_with(todos: Vec<Todo>) -> Router {
    let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    let db: Db = Arc::new(RwLock::new(Store { todos, next_id }));
    Router::new()
        .route("/", get(root))
        .route("/api/todo/", get(list_todos))
        .route("/api/todo/new_todo/", post(create_todo))
        .with_state(db)
        .layer(CorsLayer::permissive())
}

/// Sample records for local runs.
pub fn dummy_todos() -> Vec<Todo> {
    [
        (1, "Buy groceries", "Milk, eggs, bread", false),
        (2, "Walk the dog", "", true),
        (3, "Write report", "Quarterly numbers", false),
    ]
    .into_iter()
    .map(|(id, title, description, completed)| Todo {
        id,
        title: title.to_string(),
        description: description.to_string(),
        completed,
    })
    .collect()
}

pub async fn run(listener: TcpListener, todos: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(todos)).await
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    let todo = Todo {
        id: store.next_id,
        title: input.title,
        description: input.description,
        completed: input.completed,
    };
    store.next_id += 1;
    store.todos.push(todo.clone());
    info!(id = todo.id, title = %todo.title, "todo created");
    (StatusCode::CREATED, Json(todo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_defaults_optional_fields() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
        assert_eq!(input.title, "Only a title");
        assert_eq!(input.description, "");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_accepts_full_payload() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","description":"x","completed":true}"#).unwrap();
        assert_eq!(input.description, "x");
        assert!(input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn dummy_todos_have_unique_ids() {
        let todos = dummy_todos();
        let mut ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), todos.len());
    }
}
