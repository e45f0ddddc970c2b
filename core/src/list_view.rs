//! List view component: the single owner of the todo collection.
//!
//! # Design
//! - Load progress is one `LoadState` value, so a stale error can never sit
//!   next to fresh data and loading always wins.
//! - The component is a reducer: the host feeds it `Action`s and executes
//!   the `Effect`s it returns. No I/O happens here.
//! - Every request carries a `Ticket`. Responses whose ticket the view no
//!   longer tracks (superseded fetch, unmounted component) are dropped, so
//!   nothing updates state after teardown.
//! - The creation form is a child. It reports `FormEvent::Created` and the
//!   view prepends the item to its collection.

use tracing::{debug, error, warn};

use crate::client::TodoClient;
use crate::effect::{Effect, Ticket};
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::new_todo::{FormEvent, NewTodoForm};
use crate::render::{Element, Node};
use crate::types::TodoItem;

/// Progress of the collection fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Created but not mounted yet.
    Idle,
    Loading,
    Ready(Vec<TodoItem>),
    /// The fetch failed; holds the message shown to the user.
    Failed(String),
}

/// Inputs to the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Mount,
    Unmount,
    /// Re-run the collection fetch on user request.
    Refresh,
    TitleInput(String),
    Submit,
    Response {
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

#[derive(Debug)]
pub struct ListView {
    client: TodoClient,
    state: LoadState,
    form: NewTodoForm,
    lifecycle: Lifecycle,
    pending_fetch: Option<Ticket>,
    next_ticket: u64,
}

impl ListView {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            state: LoadState::Idle,
            form: NewTodoForm::new(),
            lifecycle: Lifecycle::Created,
            pending_fetch: None,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn form(&self) -> &NewTodoForm {
        &self.form
    }

    /// The collection, once loaded.
    pub fn items(&self) -> Option<&[TodoItem]> {
        match &self.state {
            LoadState::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// True while any request issued by this view or its form is unanswered.
    pub fn has_pending(&self) -> bool {
        self.pending_fetch.is_some() || self.form.in_flight() > 0
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Mount => self.mount(),
            Action::Unmount => {
                self.unmount();
                Vec::new()
            }
            Action::Refresh => self.fetch_data().into_iter().collect(),
            Action::TitleInput(text) => {
                if self.is_mounted() {
                    self.form.input(text);
                }
                Vec::new()
            }
            Action::Submit => self.submit().into_iter().collect(),
            Action::Response { ticket, result } => {
                self.on_response(ticket, result);
                Vec::new()
            }
        }
    }

    /// Start the initial fetch. Runs once per component; later calls and
    /// calls after unmount return no effects.
    pub fn mount(&mut self) -> Vec<Effect> {
        if self.lifecycle != Lifecycle::Created {
            return Vec::new();
        }
        self.lifecycle = Lifecycle::Mounted;
        self.fetch_data().into_iter().collect()
    }

    /// Tear the component down. All tracked requests are forgotten.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.pending_fetch = None;
        self.form.cancel_all();
        debug!("list view unmounted");
    }

    /// Enter `Loading` and request the collection. A fetch still in flight
    /// is superseded: its response will be ignored. Returns `None` unless
    /// the view is mounted.
    pub fn fetch_data(&mut self) -> Option<Effect> {
        if !self.is_mounted() {
            debug!("fetch ignored, view not mounted");
            return None;
        }
        let ticket = self.next_ticket();
        self.state = LoadState::Loading;
        self.pending_fetch = Some(ticket);
        let request = self.client.build_list_todos();
        debug!(%ticket, path = %request.path, "fetching todos");
        Some(Effect { ticket, request })
    }

    /// Submit the creation form. Only possible while the form is on screen,
    /// i.e. the view is mounted and `Ready`.
    pub fn submit(&mut self) -> Option<Effect> {
        if !self.is_mounted() || !matches!(self.state, LoadState::Ready(_)) {
            debug!("submit ignored, form not shown");
            return None;
        }
        let ticket = self.next_ticket();
        self.form.handle_add_todo(ticket, &self.client)
    }

    fn on_response(&mut self, ticket: Ticket, result: Result<HttpResponse, ApiError>) {
        if !self.is_mounted() {
            debug!(%ticket, "response after unmount ignored");
            return;
        }
        if self.pending_fetch == Some(ticket) {
            self.pending_fetch = None;
            self.finish_fetch(result);
            return;
        }
        if self.form.owns(ticket) {
            if let Some(event) = self.form.on_create_response(ticket, &self.client, result) {
                self.apply(event);
            }
            return;
        }
        debug!(%ticket, "response for superseded request ignored");
    }

    fn finish_fetch(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|response| self.client.parse_list_todos(response)) {
            Ok(items) => {
                debug!(count = items.len(), ?items, "fetched todos");
                self.state = LoadState::Ready(items);
            }
            Err(e) => {
                error!(error = %e, "fetching todos failed");
                self.state = LoadState::Failed(e.to_string());
            }
        }
        debug!("fetch done");
    }

    fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::Created(item) => match &mut self.state {
                LoadState::Ready(items) => items.insert(0, item),
                _ => warn!(id = %item.id, "created todo arrived while list not shown, dropped"),
            },
        }
    }

    fn next_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    pub fn render(&self) -> Node {
        match &self.state {
            LoadState::Idle | LoadState::Loading => Element::new("div").child("Loading...").into(),
            LoadState::Failed(message) => Element::new("div").child(format!("Error: {message}")).into(),
            LoadState::Ready(items) => Element::new("div")
                .child(Element::new("h1").child("Home"))
                .child(self.form.render())
                .child(
                    Element::new("ul").children(
                        items
                            .iter()
                            .map(|item| Element::new("li").key(item.id).child(item.title.clone())),
                    ),
                )
                .into(),
        }
    }
}
