//! OperationRepository - table mapping for operation records

use super::repository::Repository;
use super::traits::Entity;
use crate::dtos::OperationDTO;
use crate::entities::Operation;

pub type OperationRepository = Repository<Operation>;

impl Entity for Operation {
    const TABLE: &'static str = "operation";
    const COLUMNS: &'static [&'static str] = &["name", "description"];
    type Payload = OperationDTO;

    fn from_payload(id: i64, data: &OperationDTO) -> Self {
        Self {
            id,
            name: data.name.clone(),
            description: data.description.clone(),
        }
    }

    fn bind_values(data: &OperationDTO) -> Vec<Option<&str>> {
        vec![data.name.as_deref(), data.description.as_deref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn delete_missing_id_is_a_noop(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OperationRepository::new(pool);
        repo.create_table().await?;

        repo.delete(&42).await?;
        Ok(())
    }

    #[sqlx::test]
    async fn delete_removes_the_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = OperationRepository::new(pool);
        repo.create_table().await?;

        let created = repo
            .create(&OperationDTO {
                name: Some("inspection".to_string()),
                description: Some("routine site visit".to_string()),
            })
            .await?;

        repo.delete(&created.id).await?;
        assert_eq!(repo.read(&created.id).await?, None);
        Ok(())
    }
}
