//! Workplan entity

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Workplan {
    pub id: i64,
    pub title: Option<String>,
    pub details: Option<String>,
}
