use actix_web::{web, HttpResponse, Responder};
use std::sync::{Arc, RwLock};
use validator::Validate;

use crate::core::{Allocator, LocationGraph};
use crate::error::ApiError;
use crate::models::{
    AddEdgeRequest, AddEdgeResponse, Applicant, HealthResponse, House, NearbyQuery,
    NearbyResponse, RunAllocationRequest, RunAllocationResponse,
};

/// Application state shared across all handlers
///
/// Allocation runs are stateless; only the location graph persists between
/// requests, behind a `RwLock` so edge insertions and proximity queries can
/// interleave safely.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Allocator,
    pub graph: Arc<RwLock<LocationGraph>>,
}

/// Configure all allocation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/allocations/run", web::post().to(run_allocation))
        .route("/locations/edges", web::post().to(add_edge))
        .route("/locations/nearby", web::get().to(find_nearby));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Run one complete allocation over the submitted applicants and houses
///
/// POST /api/v1/allocations/run
///
/// Request body:
/// ```json
/// {
///   "applicants": [{"id": "...", "name": "...", "age": 45, "familySize": 6, "income": 15000}],
///   "houses": [{"id": "...", "address": "...", "bedrooms": 3, "size": 1200, "type": "apartment"}]
/// }
/// ```
///
/// Each call is a self-contained run: the submitted collections are
/// consumed, and the ordered allocation list comes back in priority order.
async fn run_allocation(
    state: web::Data<AppState>,
    req: web::Json<RunAllocationRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    let applicants: Vec<Applicant> = req.applicants.into_iter().map(Into::into).collect();
    let houses: Vec<House> = req.houses.into_iter().map(Into::into).collect();

    tracing::info!(
        "Running allocation: {} applicants, {} houses",
        applicants.len(),
        houses.len()
    );

    let run = state.allocator.allocate(applicants, houses);

    tracing::info!(
        "Allocation complete: {} of {} applicants housed",
        run.allocations.len(),
        run.total_applicants
    );

    Ok(HttpResponse::Ok().json(RunAllocationResponse {
        run_id: uuid::Uuid::new_v4().to_string(),
        total_allocated: run.allocations.len(),
        allocations: run.allocations,
        total_applicants: run.total_applicants,
        generated_at: chrono::Utc::now(),
    }))
}

/// Add an undirected edge to the location graph
///
/// POST /api/v1/locations/edges
async fn add_edge(
    state: web::Data<AppState>,
    req: web::Json<AddEdgeRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let mut graph = state.graph.write().expect("location graph lock poisoned");
    graph.add_edge(&req.house_id1, &req.house_id2, req.distance);
    let node_count = graph.node_count();
    drop(graph);

    tracing::debug!(
        "Added edge {} <-> {} ({})",
        req.house_id1,
        req.house_id2,
        req.distance
    );

    Ok(HttpResponse::Ok().json(AddEdgeResponse {
        success: true,
        node_count,
    }))
}

/// Find houses within a distance budget of a starting house
///
/// GET /api/v1/locations/nearby?start=H-101&maxDistance=10
///
/// An unknown start id is not an error; it simply has nothing nearby.
async fn find_nearby(
    state: web::Data<AppState>,
    query: web::Query<NearbyQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let graph = state.graph.read().expect("location graph lock poisoned");
    let houses = graph.find_nearby(&query.start, query.max_distance);
    drop(graph);

    tracing::debug!(
        "Nearby query from {} within {}: {} houses",
        query.start,
        query.max_distance,
        houses.len()
    );

    Ok(HttpResponse::Ok().json(NearbyResponse {
        start: query.start.clone(),
        max_distance: query.max_distance,
        count: houses.len(),
        houses,
    }))
}
