//! Operation entity

use serde::{Deserialize, Serialize};

/// A planned field operation. Every column except the id is an
/// unconstrained nullable TEXT.
#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}
