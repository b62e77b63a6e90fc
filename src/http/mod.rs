//! HTTP surface: event ingestion and state queries
//!
//! - GET /ws - WebSocket upgrade; text frames carry assistant events
//! - GET /status - Current session state snapshot
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
