//! Common repository traits
//!
//! This module defines the generic persistence interface. A type describes
//! its table once and [`super::Repository`] derives every CRUD statement
//! from that metadata, so the four entity repositories share a single
//! implementation.

use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;

/// Mapping between an entity and its backing table
///
/// # Associated items
/// * `TABLE` - table name; a static identifier, safe to interpolate in SQL
/// * `COLUMNS` - non-id column names, in declaration order
/// * `Payload` - client-sent record body (same fields, without the id)
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    type Payload: Send + Sync;

    /// Builds the entity from a payload plus the id assigned by the store
    /// (create) or taken from the request path (update)
    ///
    /// # Arguments
    /// * `id` - primary key of the stored row
    /// * `data` - payload the row was persisted from
    fn from_payload(id: i64, data: &Self::Payload) -> Self;

    /// Payload field values in `COLUMNS` order, ready to bind
    ///
    /// # Returns
    /// One value per entry of `COLUMNS`; `None` binds as SQL NULL
    fn bind_values(data: &Self::Payload) -> Vec<Option<&str>>;
}
