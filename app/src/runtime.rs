//! Host runtime for the list view.
//!
//! # Design
//! - `App` owns the mounted `ListView` and executes the effects it returns.
//!   Each request runs as a task in a `JoinSet`; the blocking transport call
//!   itself goes to `spawn_blocking`.
//! - Finished requests come back over an mpsc channel and are fed to the
//!   view one at a time from `next_completion`, so the view only ever
//!   changes on the task that owns `App`.
//! - A `CancellationToken` spans the component's lifetime. `unmount` (or
//!   dropping `App`) cancels it and aborts the task set: no completion is
//!   delivered after teardown.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use todo_core::{Action, ApiError, Effect, HttpResponse, ListView, Node, Ticket, TodoClient};

use crate::transport::Transport;

struct Completion {
    ticket: Ticket,
    result: Result<HttpResponse, ApiError>,
}

pub struct App<T: Transport> {
    view: ListView,
    transport: Arc<T>,
    cancel: CancellationToken,
    tasks: JoinSet<()>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
}

impl<T: Transport> App<T> {
    /// Create the list view and mount it, starting the initial fetch.
    /// Must be called from within a tokio runtime.
    pub fn mount(client: TodoClient, transport: T) -> Self {
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let mut app = Self {
            view: ListView::new(client),
            transport: Arc::new(transport),
            cancel: CancellationToken::new(),
            tasks: JoinSet::new(),
            completions_tx,
            completions,
        };
        app.dispatch(Action::Mount);
        app
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn render(&self) -> Node {
        self.view.render()
    }

    /// Forward an action to the view and start every request it asks for.
    pub fn dispatch(&mut self, action: Action) {
        for effect in self.view.dispatch(action) {
            self.spawn(effect);
        }
    }

    fn spawn(&mut self, effect: Effect) {
        while self.tasks.try_join_next().is_some() {}

        let Effect { ticket, request } = effect;
        let transport = Arc::clone(&self.transport);
        let cancel = self.cancel.clone();
        let tx = self.completions_tx.clone();
        debug!(%ticket, method = ?request.method, path = %request.path, "request started");

        self.tasks.spawn(async move {
            let call = tokio::task::spawn_blocking(move || transport.execute(request));
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                joined = call => joined.unwrap_or_else(|e| Err(ApiError::Transport(e.to_string()))),
            };
            if tx.send(Completion { ticket, result }).is_err() {
                warn!(%ticket, "completion dropped, app gone");
            }
        });
    }

    /// Wait for the next finished request and apply it to the view.
    /// Returns `false` without waiting when the view expects no response.
    pub async fn next_completion(&mut self) -> bool {
        if !self.view.has_pending() {
            return false;
        }
        match self.completions.recv().await {
            Some(Completion { ticket, result }) => {
                self.dispatch(Action::Response { ticket, result });
                true
            }
            None => false,
        }
    }

    /// Apply completions until the view has nothing in flight.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    /// Tear the view down and cancel every request still running.
    pub fn unmount(&mut self) {
        self.cancel.cancel();
        self.tasks.abort_all();
        self.view.dispatch(Action::Unmount);
    }
}

impl<T: Transport> Drop for App<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
