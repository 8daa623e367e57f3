//! PAC entity - program assignment code

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Pac {
    pub id: i64,
    pub code: Option<String>,
    pub description: Option<String>,
}
