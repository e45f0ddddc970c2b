//! I/O-free core of the todo list client.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and models the two UI
//! components, the list view and the creation form, as deterministic state
//! machines that render to a `Node` tree.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each API operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `ListView` is a reducer over `Action`s. It returns `Effect`s for the
//!   host to execute and owns the canonical todo collection.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod effect;
pub mod error;
pub mod http;
pub mod list_view;
pub mod new_todo;
pub mod render;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use effect::{Effect, Ticket};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list_view::{Action, ListView, LoadState};
pub use new_todo::{FormEvent, NewTodoForm};
pub use render::{Element, Node};
pub use types::{CreateTodo, TodoId, TodoItem};
