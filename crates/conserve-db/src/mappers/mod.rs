//! Entity to model mappers
//!
//! Conversions between domain entities (conserve-core) and database models.
//! - `From<Model> for Entity`: rows that always map cleanly
//! - `TryFrom<Model> for Entity`: rows carrying text columns parsed into value objects

mod campaign;
mod comment;
mod connection;
mod report;
mod user;
