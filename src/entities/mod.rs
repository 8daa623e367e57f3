//! Entities module - domain entities
//!
//! Each entity corresponds to one table in the database and serializes 1:1
//! as the JSON record returned by the API.

pub mod operation;
pub mod pac;
pub mod pps;
pub mod workplan;

// Re-exports to simplify imports
pub use operation::Operation;
pub use pac::Pac;
pub use pps::Pps;
pub use workplan::Workplan;
