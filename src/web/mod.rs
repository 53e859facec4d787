//! JSON-over-HTTP front-end: graphs live in sessions and are queried by id.

pub mod api;
pub mod models;
pub mod server;

pub use api::{create_router, AppState};
pub use server::{build_app, start_server, ServerConfig};
