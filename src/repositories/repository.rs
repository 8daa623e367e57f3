//! Generic repository - one CRUD implementation shared by every entity
//!
//! Statements are assembled from [`Entity`] metadata at call time and
//! checked at runtime; table and column names are static identifiers from
//! the entity mapping, never client input.

use super::traits::Entity;
use sqlx::{Error, SqlitePool};
use std::marker::PhantomData;
use tracing::{debug, instrument};

pub struct Repository<T> {
    connection_pool: SqlitePool,
    entity: PhantomData<T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self {
            connection_pool,
            entity: PhantomData,
        }
    }

    fn select_columns() -> String {
        format!("id, {}", T::COLUMNS.join(", "))
    }

    fn placeholders() -> String {
        vec!["?"; T::COLUMNS.len()].join(", ")
    }

    /// Creates the backing table if it does not exist yet. Every column
    /// beyond the id is an unconstrained nullable TEXT.
    pub async fn create_table(&self) -> Result<(), Error> {
        let columns = T::COLUMNS
            .iter()
            .map(|column| format!("{column} TEXT"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY AUTOINCREMENT, {})",
            T::TABLE,
            columns
        );
        sqlx::query(&sql).execute(&self.connection_pool).await?;
        Ok(())
    }

    /// Returns every stored record, in no guaranteed order
    pub async fn list(&self) -> Result<Vec<T>, Error> {
        let sql = format!("SELECT {} FROM {}", Self::select_columns(), T::TABLE);
        let records = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.connection_pool)
            .await?;
        Ok(records)
    }

    /// Persists a new record; the id comes from the store, never from the
    /// client
    #[instrument(skip(self, data), fields(table = T::TABLE))]
    pub async fn create(&self, data: &T::Payload) -> Result<T, Error> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            Self::placeholders()
        );
        let mut query = sqlx::query(&sql);
        for value in T::bind_values(data) {
            query = query.bind(value);
        }
        let result = query.execute(&self.connection_pool).await?;

        let new_id = result.last_insert_rowid();
        debug!("Inserted row {} into {}", new_id, T::TABLE);

        Ok(T::from_payload(new_id, data))
    }

    /// Reads a record by primary key; an absent id is `Ok(None)`, not an
    /// error
    pub async fn read(&self, id: &i64) -> Result<Option<T>, Error> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            Self::select_columns(),
            T::TABLE
        );
        let record = sqlx::query_as::<_, T>(&sql)
            .bind(*id)
            .fetch_optional(&self.connection_pool)
            .await?;
        Ok(record)
    }

    /// Full replacement keyed on the given id: overwrites the row when
    /// present, creates it under that id when absent (upsert)
    #[instrument(skip(self, data), fields(table = T::TABLE, id = %id))]
    pub async fn update(&self, id: &i64, data: &T::Payload) -> Result<T, Error> {
        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{column} = excluded.{column}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES (?, {}) ON CONFLICT(id) DO UPDATE SET {}",
            T::TABLE,
            T::COLUMNS.join(", "),
            Self::placeholders(),
            assignments
        );
        let mut query = sqlx::query(&sql).bind(*id);
        for value in T::bind_values(data) {
            query = query.bind(value);
        }
        query.execute(&self.connection_pool).await?;

        Ok(T::from_payload(*id, data))
    }

    /// Removes the row if present; deleting an absent id is a no-op
    #[instrument(skip(self), fields(table = T::TABLE, id = %id))]
    pub async fn delete(&self, id: &i64) -> Result<(), Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;
        debug!("Deleted {} row(s) from {}", result.rows_affected(), T::TABLE);
        Ok(())
    }
}
