use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use crate::graph::MutableGraph;
use crate::report::DistanceReport;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
///
/// Handlers hold the lock only to look up or replace a session. Queries run
/// on a snapshot of the graph, so edge insertion never changes a graph under
/// an in-flight query and never waits for one.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph).get(list_graphs))
        .route("/api/graphs/:graph_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:graph_id/edges", post(add_edges))
        .route("/api/graphs/:graph_id/shortest-paths", post(run_query))
        .route("/api/health", get(health_check))
}

/// Create a graph from vertices and edges
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> Result<(StatusCode, Json<GraphSummary>), ApiError> {
    let mut graph = LabelGraph::new();
    for vertex in request.vertices {
        graph.add_vertex(vertex);
    }
    apply_edges(&mut graph, &request.edges, request.undirected).map_err(engine_error)?;

    let session = Session::new(graph);
    let summary = session.summary();

    let mut sessions = state.sessions.write().map_err(|_| poisoned())?;
    if sessions.len() >= state.max_sessions {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "too_many_sessions",
            format!("Session limit of {} reached", state.max_sessions),
        ));
    }
    sessions.insert(session.id, session);
    log::info!("created graph {} ({} vertices)", summary.id, summary.vertex_count);

    Ok((StatusCode::CREATED, Json(summary)))
}

/// List all graphs
pub async fn list_graphs(State(state): State<AppState>) -> Result<Json<Vec<GraphSummary>>, ApiError> {
    let sessions = state.sessions.read().map_err(|_| poisoned())?;
    let mut summaries: Vec<GraphSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get a graph summary
pub async fn get_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<Json<GraphSummary>, ApiError> {
    let sessions = state.sessions.read().map_err(|_| poisoned())?;
    match sessions.get(&graph_id) {
        Some(session) => Ok(Json(session.summary())),
        None => Err(not_found(graph_id)),
    }
}

/// Delete a graph, freeing its session slot
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.write().map_err(|_| poisoned())?;
    match sessions.remove(&graph_id) {
        Some(_) => {
            log::info!("deleted graph {}", graph_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(not_found(graph_id)),
    }
}

/// Append edges to a graph. The batch is applied entirely or not at all.
pub async fn add_edges(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<AddEdgesRequest>,
) -> Result<Json<GraphSummary>, ApiError> {
    let mut sessions = state.sessions.write().map_err(|_| poisoned())?;
    let session = sessions.get_mut(&graph_id).ok_or_else(|| not_found(graph_id))?;

    let mut updated = LabelGraph::clone(&session.graph);
    apply_edges(&mut updated, &request.edges, request.undirected).map_err(engine_error)?;
    session.graph = Arc::new(updated);

    Ok(Json(session.summary()))
}

/// Run a shortest path query from the requested source
///
/// The query runs on the blocking thread pool against a snapshot of the graph.
pub async fn run_query(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let graph = {
        let sessions = state.sessions.read().map_err(|_| poisoned())?;
        let session = sessions.get(&graph_id).ok_or_else(|| not_found(graph_id))?;
        Arc::clone(&session.graph)
    };

    let dijkstra = Dijkstra::new();
    let algorithm =
        <Dijkstra as ShortestPathAlgorithm<String, f64, LabelGraph>>::name(&dijkstra).to_string();

    let source = request.source;
    let outcome = tokio::task::spawn_blocking(move || -> crate::Result<_> {
        let start_time = Instant::now();
        let result = dijkstra.compute_shortest_paths(&*graph, &source)?;
        let execution_time = start_time.elapsed();
        Ok((DistanceReport::new(&*graph, &result), execution_time))
    })
    .await
    .map_err(|err| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "algorithm_execution_failed",
            format!("Query task failed: {}", err),
        )
    })?;
    let (report, execution_time) = outcome.map_err(engine_error)?;

    Ok(Json(QueryResponse {
        execution_id: Uuid::new_v4(),
        graph_id,
        algorithm,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        report,
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn engine_error(err: Error) -> ApiError {
    match err {
        Error::InvalidVertex(_) => api_error(StatusCode::NOT_FOUND, "invalid_vertex", err.to_string()),
        Error::InvalidWeight(_) => api_error(StatusCode::BAD_REQUEST, "invalid_weight", err.to_string()),
        Error::AlgorithmError(_) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "algorithm_execution_failed",
            err.to_string(),
        ),
    }
}

fn not_found(graph_id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "graph_not_found",
        format!("Graph {} not found", graph_id),
    )
}

fn poisoned() -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "state_unavailable",
        "Session store lock poisoned".to_string(),
    )
}
