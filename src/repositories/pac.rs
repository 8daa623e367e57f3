//! PacRepository - table mapping for PAC records

use super::repository::Repository;
use super::traits::Entity;
use crate::dtos::PacDTO;
use crate::entities::Pac;

pub type PacRepository = Repository<Pac>;

impl Entity for Pac {
    const TABLE: &'static str = "pac";
    const COLUMNS: &'static [&'static str] = &["code", "description"];
    type Payload = PacDTO;

    fn from_payload(id: i64, data: &PacDTO) -> Self {
        Self {
            id,
            code: data.code.clone(),
            description: data.description.clone(),
        }
    }

    fn bind_values(data: &PacDTO) -> Vec<Option<&str>> {
        vec![data.code.as_deref(), data.description.as_deref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn list_grows_and_shrinks_with_the_table(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PacRepository::new(pool);
        repo.create_table().await?;
        assert!(repo.list().await?.is_empty());

        let first = repo
            .create(&PacDTO {
                code: Some("PAC-01".to_string()),
                description: Some("dairy program".to_string()),
            })
            .await?;
        assert_eq!(repo.list().await?.len(), 1);

        let second = repo
            .create(&PacDTO {
                code: Some("PAC-02".to_string()),
                description: None,
            })
            .await?;
        assert_ne!(first.id, second.id);
        assert_eq!(repo.list().await?.len(), 2);

        repo.delete(&first.id).await?;
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[sqlx::test]
    async fn null_columns_round_trip(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = PacRepository::new(pool);
        repo.create_table().await?;

        // Every non-id column is nullable, an empty payload is valid
        let created = repo
            .create(&PacDTO {
                code: None,
                description: None,
            })
            .await?;

        let found = repo.read(&created.id).await?.unwrap();
        assert_eq!(found.code, None);
        assert_eq!(found.description, None);
        Ok(())
    }
}
