//! Host side of the todo list client.
//!
//! # Overview
//! `todo-core` decides what to request and how state changes; this crate
//! does the I/O. It executes requests with `ureq` on a tokio runtime, ties
//! them to the lifetime of the mounted view, and provides configuration,
//! logging setup and the terminal front-end's command parser.

pub mod command;
pub mod config;
pub mod logging;
pub mod runtime;
pub mod transport;

pub use command::Command;
pub use config::Config;
pub use runtime::App;
pub use transport::{Transport, UreqTransport};
