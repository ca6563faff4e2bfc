// Core algorithm exports
pub mod allocator;
pub mod graph;
pub mod heap;
pub mod scoring;

pub use allocator::{Allocator, AllocationRun, DEFAULT_MIN_MATCH_SCORE};
pub use graph::{Edge, LocationGraph};
pub use heap::ApplicantHeap;
pub use scoring::{match_score, priority_score};
