//! Axum extractors for request handling
//!
//! Custom extractors for path parameters and validated JSON bodies.

mod path;
mod validated;

pub use path::ApiPath;
pub use validated::ValidatedJson;
