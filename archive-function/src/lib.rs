//! Cloud function entry point for the magazine scan archive.
//!
//! The function platform delivers HTTP requests as JSON events; this crate
//! routes them to the `shared` listers and answers with the platform's
//! response envelope. The bundled binary adapts plain HTTP requests into
//! the same events so the handler also runs as an ordinary process.

pub mod config;
pub mod event;
pub mod handler;

pub use event::{FunctionEvent, FunctionResponse};
pub use handler::{handle_event, FunctionState};
