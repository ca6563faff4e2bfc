//! HomeAlloc Algo - Priority-driven housing allocation service
//!
//! This library provides the core allocation algorithm used by the HomeAlloc
//! housing platform: need-based priority scoring, a max-heap applicant queue,
//! greedy applicant-to-house matching, and bounded proximity queries over a
//! graph of house locations.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{match_score, priority_score, Allocator, ApplicantHeap, LocationGraph};
pub use crate::models::{Allocation, Applicant, House, RunAllocationRequest, RunAllocationResponse};
