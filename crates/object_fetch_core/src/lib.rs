//! Shared object-fetch domain primitives.
//!
//! This crate owns the fetch request contract and the deterministic outcome
//! selection policy. It intentionally excludes AWS SDK and Lambda runtime
//! concerns; those live in `crates/object_fetch_lambda`.

pub mod contract;
pub mod selection;
