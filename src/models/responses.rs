use serde::{Deserialize, Serialize};

use crate::models::domain::Allocation;

/// Response for the run-allocation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunAllocationResponse {
    #[serde(rename = "runId")]
    pub run_id: String,
    pub allocations: Vec<Allocation>,
    #[serde(rename = "totalApplicants")]
    pub total_applicants: usize,
    #[serde(rename = "totalAllocated")]
    pub total_allocated: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the nearby-houses endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub start: String,
    #[serde(rename = "maxDistance")]
    pub max_distance: f64,
    pub houses: Vec<String>,
    pub count: usize,
}

/// Response after adding a graph edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEdgeResponse {
    pub success: bool,
    #[serde(rename = "nodeCount")]
    pub node_count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
