//! Repositories module - data access layer
//!
//! The CRUD statements are written once in the generic [`Repository`] and
//! derived from per-entity table metadata ([`traits::Entity`]). Each entity
//! module only declares its mapping and exposes a repository alias.

pub mod operation;
pub mod pac;
pub mod pps;
pub mod repository;
pub mod traits;
pub mod workplan;

// Re-exports to simplify imports
pub use repository::Repository;
pub use traits::Entity;

pub use operation::OperationRepository;
pub use pac::PacRepository;
pub use pps::PpsRepository;
pub use workplan::WorkplanRepository;
