//! AWS-oriented adapters and handlers for concurrent object fetching.
//!
//! This crate owns runtime integration details (the Lambda handler and the
//! storage adapter seam) on top of the request contract and outcome selection
//! primitives in `object_fetch_core`.

pub mod adapters;
pub mod handlers;
