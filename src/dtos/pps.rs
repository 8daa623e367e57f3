//! PPS DTOs

use serde::{Deserialize, Serialize};

/// PPS body for POST and PUT
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PpsDTO {
    pub code: Option<String>,
    pub info: Option<String>,
}
