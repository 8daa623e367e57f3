//! WorkplanRepository - table mapping for workplan records

use super::repository::Repository;
use super::traits::Entity;
use crate::dtos::WorkplanDTO;
use crate::entities::Workplan;

pub type WorkplanRepository = Repository<Workplan>;

impl Entity for Workplan {
    const TABLE: &'static str = "workplan";
    const COLUMNS: &'static [&'static str] = &["title", "details"];
    type Payload = WorkplanDTO;

    fn from_payload(id: i64, data: &WorkplanDTO) -> Self {
        Self {
            id,
            title: data.title.clone(),
            details: data.details.clone(),
        }
    }

    fn bind_values(data: &WorkplanDTO) -> Vec<Option<&str>> {
        vec![data.title.as_deref(), data.details.as_deref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn update_overwrites_the_row_under_its_id(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = WorkplanRepository::new(pool);
        repo.create_table().await?;

        let created = repo
            .create(&WorkplanDTO {
                title: Some("Q1 sampling".to_string()),
                details: Some("draft".to_string()),
            })
            .await?;

        let updated = repo
            .update(
                &created.id,
                &WorkplanDTO {
                    title: Some("Q1 sampling".to_string()),
                    details: Some("approved".to_string()),
                },
            )
            .await?;
        assert_eq!(updated.id, created.id);

        let found = repo.read(&created.id).await?.unwrap();
        assert_eq!(found.details.as_deref(), Some("approved"));
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[sqlx::test]
    async fn update_on_a_missing_id_creates_the_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = WorkplanRepository::new(pool);
        repo.create_table().await?;

        let updated = repo
            .update(
                &7,
                &WorkplanDTO {
                    title: Some("recovered plan".to_string()),
                    details: None,
                },
            )
            .await?;
        assert_eq!(updated.id, 7);

        let found = repo.read(&7).await?;
        assert_eq!(found, Some(updated));
        Ok(())
    }
}
