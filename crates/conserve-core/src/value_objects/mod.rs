//! Value objects - immutable types that represent domain concepts

mod connection_status;
mod display_name;
mod reported_table;

pub use connection_status::ConnectionStatus;
pub use display_name::{comment_author_name, profile_name, FALLBACK_DISPLAY_NAME};
pub use reported_table::{ReportedTable, ReportedTableParseError};
