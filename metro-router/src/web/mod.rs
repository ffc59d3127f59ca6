//! Web layer for the metro route finder.
//!
//! Provides HTTP endpoints for listing stops and lines and for finding
//! routes. Free-text stop names are normalized here before they reach
//! the planner.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
