//! Requests the UI components hand to the host.

use std::fmt;

use crate::http::HttpRequest;

/// Identifies one in-flight request. The host echoes it back with the
/// response so the component that issued the request can claim it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A request the host must execute, answering with
/// `Action::Response { ticket, .. }` once it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub ticket: Ticket,
    pub request: HttpRequest,
}
