//! Application State - global application state
//!
//! Holds the repositories shared by all routes.

use crate::repositories::{OperationRepository, PacRepository, PpsRepository, WorkplanRepository};
use sqlx::SqlitePool;

/// Global application state shared between all routes
pub struct AppState {
    /// Repository for operation records
    pub operation: OperationRepository,

    /// Repository for PAC records
    pub pac: PacRepository,

    /// Repository for PPS records
    pub pps: PpsRepository,

    /// Repository for workplan records
    pub workplan: WorkplanRepository,
}

impl AppState {
    /// Creates a new AppState instance, initializing every repository with
    /// the provided connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            operation: OperationRepository::new(pool.clone()),
            pac: PacRepository::new(pool.clone()),
            pps: PpsRepository::new(pool.clone()),
            workplan: WorkplanRepository::new(pool),
        }
    }

    /// Creates the backing table of every repository if it does not exist
    /// yet. Run once at startup, before the router starts serving.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        self.operation.create_table().await?;
        self.pac.create_table().await?;
        self.pps.create_table().await?;
        self.workplan.create_table().await?;
        Ok(())
    }
}
