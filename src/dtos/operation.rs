//! Operation DTOs

use serde::{Deserialize, Serialize};

/// Operation body for POST and PUT (id-less, fields optional like the columns)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OperationDTO {
    pub name: Option<String>,
    pub description: Option<String>,
}
