//! Workplan DTOs

use serde::{Deserialize, Serialize};

/// Workplan body for POST and PUT
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkplanDTO {
    pub title: Option<String>,
    pub details: Option<String>,
}
