//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod campaigns;
pub mod connections;
pub mod health;
pub mod reports;
pub mod users;
