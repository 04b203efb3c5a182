//! Integration test utilities for the conservation platform API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a real PostgreSQL database.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
