//! HTTP API module: application state, routes, and handlers.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
