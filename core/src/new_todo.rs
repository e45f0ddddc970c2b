//! Creation form component.
//!
//! # Design
//! The form owns only its transient `title` field and the tickets of the
//! create requests it has issued. It never touches the todo collection:
//! a successful create is reported to the parent as `FormEvent::Created`,
//! and the parent decides what to do with the item.
//!
//! Submitting is not a separate state. A user may submit again while a
//! create is still in flight and every submit issues its own request.

use std::collections::HashSet;

use tracing::{error, info};

use crate::client::TodoClient;
use crate::effect::{Effect, Ticket};
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::render::{Element, Node};
use crate::types::{CreateTodo, TodoItem};

/// Messages the form sends to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The server accepted a new todo.
    Created(TodoItem),
}

#[derive(Debug, Default)]
pub struct NewTodoForm {
    title: String,
    in_flight: HashSet<Ticket>,
}

impl NewTodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the `title` field.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    /// Number of create requests still waiting for a response.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn owns(&self, ticket: Ticket) -> bool {
        self.in_flight.contains(&ticket)
    }

    /// Submit the form: build a create request from the current title.
    ///
    /// The title is sent as typed; an empty field produces `title: ""`.
    /// The field keeps its value until the server confirms the create.
    pub fn handle_add_todo(&mut self, ticket: Ticket, client: &TodoClient) -> Option<Effect> {
        let input = CreateTodo::from_title(self.title.clone());
        match client.build_create_todo(&input) {
            Ok(request) => {
                self.in_flight.insert(ticket);
                Some(Effect { ticket, request })
            }
            Err(e) => {
                error!(error = %e, "failed to build create request");
                None
            }
        }
    }

    /// Consume the response to a create issued by this form.
    ///
    /// On success the field is cleared and the created item is handed to the
    /// parent. On failure the error is logged and the field keeps its value.
    pub fn on_create_response(
        &mut self,
        ticket: Ticket,
        client: &TodoClient,
        result: Result<HttpResponse, ApiError>,
    ) -> Option<FormEvent> {
        if !self.in_flight.remove(&ticket) {
            return None;
        }
        match result.and_then(|response| client.parse_create_todo(response)) {
            Ok(item) => {
                info!(%ticket, id = %item.id, title = %item.title, "todo created");
                self.title.clear();
                Some(FormEvent::Created(item))
            }
            Err(e) => {
                error!(%ticket, error = %e, "create failed");
                None
            }
        }
    }

    /// Forget every in-flight create. Their responses will be ignored.
    pub fn cancel_all(&mut self) {
        self.in_flight.clear();
    }

    pub fn render(&self) -> Node {
        Element::new("div")
            .child(
                Element::new("form")
                    .child(
                        Element::new("input")
                            .attr("type", "text")
                            .attr("placeholder", "new todo")
                            .attr("name", "title")
                            .attr("value", self.title.clone()),
                    )
                    .child(Element::new("button").attr("type", "submit").child("Add")),
            )
            .into()
    }
}
