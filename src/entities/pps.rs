//! PPS entity

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Pps {
    pub id: i64,
    pub code: Option<String>,
    pub info: Option<String>,
}
