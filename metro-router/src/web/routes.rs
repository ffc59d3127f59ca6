//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{debug, warn};

use crate::domain::normalize_stop_name;
use crate::planner::{Planner, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops", get(list_stops))
        .route("/lines", get(list_lines))
        .route("/route", get(find_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every stop with the lines serving it.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    let stops = state
        .network
        .list_stops()
        .into_iter()
        .map(StopResult::from)
        .collect();

    Json(StopsResponse { stops })
}

/// List every line with its stops in running order.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let network = &state.network;
    let lines = network
        .lines()
        .map(|(_, line)| LineResult::from_line(network, line))
        .collect();

    Json(LinesResponse { lines })
}

/// Find the quickest route between two stops.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = normalized(&req.from, "origin")?;
    let to = normalized(&req.to, "destination")?;
    debug!(%from, %to, "Route requested");

    let itinerary = Planner::new(&state.network).find_route(&from, &to)?;

    Ok(Json(RouteResponse::from_itinerary(&itinerary)))
}

/// Normalize a free-text stop name, rejecting blank input.
fn normalized(input: &str, which: &str) -> Result<String, AppError> {
    let name = normalize_stop_name(input);
    if name.is_empty() {
        return Err(AppError::BadRequest {
            message: format!("{which} stop name is empty"),
        });
    }
    Ok(name)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    StationNotFound { name: String },
    NoPath { from: String, to: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::StationNotFound { name } => AppError::StationNotFound { name },
            RouteError::NoPathExists { from, to } => AppError::NoPath { from, to },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message, hint) = match self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "bad_request", message, None)
            }
            AppError::StationNotFound { name } => (
                StatusCode::NOT_FOUND,
                "station_not_found",
                format!("station not found: {name}"),
                Some("GET /stops lists every known station".to_string()),
            ),
            AppError::NoPath { from, to } => (
                StatusCode::NOT_FOUND,
                "no_path",
                format!("no path exists between {from} and {to}"),
                None,
            ),
        };

        warn!(%status, kind, "{message}");

        let body = Json(ErrorResponse {
            kind,
            error: message,
            hint,
        });
        (status, body).into_response()
    }
}
