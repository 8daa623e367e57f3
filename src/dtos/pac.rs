//! PAC DTOs

use serde::{Deserialize, Serialize};

/// PAC body for POST and PUT
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PacDTO {
    pub code: Option<String>,
    pub description: Option<String>,
}
