// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Allocation, Applicant, House};
pub use requests::{AddEdgeRequest, ApplicantInput, HouseInput, NearbyQuery, RunAllocationRequest};
pub use responses::{
    AddEdgeResponse, ErrorResponse, HealthResponse, NearbyResponse, RunAllocationResponse,
};
