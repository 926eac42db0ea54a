//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::domain::Station;
use crate::graph::load_stations_and_graph;
use crate::planner::Algorithm;
use crate::stations::StationDirectory;
use crate::store::{RouteStore, StoreError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S: RouteStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations::<S>))
        .route("/route", get(find_route::<S>))
        .route("/reload", post(reload::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station in store order.
async fn list_stations<S: RouteStore>(State(state): State<AppState<S>>) -> Json<StationsResponse> {
    let directory = state.directory().await;
    let stations = directory.all().iter().map(StationView::from).collect();
    Json(StationsResponse { stations })
}

/// Resolve a station query or report it as a bad request.
fn resolve_station<'a>(
    directory: &'a StationDirectory,
    query: &str,
    role: &str,
) -> Result<&'a Station, AppError> {
    directory.resolve(query).ok_or_else(|| AppError::BadRequest {
        message: format!("Unknown {role} station: {query}"),
    })
}

/// Find a route between two stations.
async fn find_route<S: RouteStore>(
    State(state): State<AppState<S>>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let algorithm = match req.algorithm.as_deref().filter(|a| !a.trim().is_empty()) {
        Some(name) => name.parse::<Algorithm>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => state.config.default_algorithm,
    };

    // One snapshot for both lookup and search
    let snapshot = state.pathfinder.snapshot().await;
    let directory = &snapshot.directory;
    let origin = resolve_station(directory, &req.from, "origin")?;
    let destination = resolve_station(directory, &req.to, "destination")?;

    for (role, station) in [("origin", origin), ("destination", destination)] {
        if !snapshot.graph.contains_node(station.id) {
            debug!(role, station = %station.id, code = %station.code, "Station has no segments");
        }
    }

    let route = snapshot
        .find_route(origin.id, destination.id, algorithm)
        .ok_or_else(|| AppError::NotFound {
            message: format!("No route from {} to {}", origin.name, destination.name),
        })?;

    info!(
        from = %origin.code,
        to = %destination.code,
        %algorithm,
        segments = route.segment_count(),
        "Found route"
    );

    let stations = route
        .station_ids()
        .iter()
        .map(|&id| StationInfo::lookup(directory, id))
        .collect();

    Ok(Json(RouteResponse {
        stations,
        summary: directory.format_path(route.station_ids()),
        segment_count: route.segment_count(),
        total_duration_mins: route.total_duration_mins(),
        total_distance_km: route.total_distance_km(),
        algorithm: algorithm.to_string(),
    }))
}

/// Reload stations and segments from the store.
///
/// On failure the current network stays in place.
async fn reload<S: RouteStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<ReloadResponse>, AppError> {
    let (stations, graph) = load_stations_and_graph(state.store.as_ref(), state.config.weight).await?;

    let nodes = graph.all_node_ids();
    let isolated_stations = stations.iter().filter(|s| !nodes.contains(&s.id)).count();
    if isolated_stations > 0 {
        warn!(isolated_stations, "Some stations have no route segments");
    }

    let response = ReloadResponse {
        stations: stations.len(),
        nodes: nodes.len(),
        edges: graph.edge_count(),
        isolated_stations,
        loaded_at: Utc::now().to_rfc3339(),
    };

    state
        .replace_network(StationDirectory::new(stations), graph)
        .await;

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
