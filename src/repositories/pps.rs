//! PpsRepository - table mapping for PPS records

use super::repository::Repository;
use super::traits::Entity;
use crate::dtos::PpsDTO;
use crate::entities::Pps;

pub type PpsRepository = Repository<Pps>;

impl Entity for Pps {
    const TABLE: &'static str = "pps";
    const COLUMNS: &'static [&'static str] = &["code", "info"];
    type Payload = PpsDTO;

    fn from_payload(id: i64, data: &PpsDTO) -> Self {
        Self {
            id,
            code: data.code.clone(),
            info: data.info.clone(),
        }
    }

    fn bind_values(data: &PpsDTO) -> Vec<Option<&str>> {
        vec![data.code.as_deref(), data.info.as_deref()]
    }
}
