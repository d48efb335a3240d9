//! Section Repository

use super::{Mutation, RepoResult};
use shared::models::{Section, SectionFields};
use sqlx::SqlitePool;

/// All sections in store order (no ORDER BY)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Section>> {
    let sections = sqlx::query_as::<_, Section>("SELECT id, name, image FROM sections")
        .fetch_all(pool)
        .await?;
    Ok(sections)
}

pub async fn create(pool: &SqlitePool, data: SectionFields) -> RepoResult<Section> {
    let section = sqlx::query_as::<_, Section>(
        "INSERT INTO sections (name, image) VALUES (?, ?) RETURNING id, name, image",
    )
    .bind(data.name)
    .bind(data.image)
    .fetch_one(pool)
    .await?;
    tracing::debug!(section_id = section.id, "Section created");
    Ok(section)
}

pub async fn update(pool: &SqlitePool, id: i64, data: SectionFields) -> RepoResult<Mutation<Section>> {
    let section = sqlx::query_as::<_, Section>(
        "UPDATE sections SET name = ?, image = ? WHERE id = ? RETURNING id, name, image",
    )
    .bind(data.name)
    .bind(data.image)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    if section.is_none() {
        tracing::debug!(section_id = id, "Section update matched no row");
    }
    Ok(Mutation::returning(section))
}

/// Delete by id. Items of the section are left in place.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<Mutation<()>> {
    let result = sqlx::query("DELETE FROM sections WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    tracing::debug!(section_id = id, rows = result.rows_affected(), "Section delete");
    Ok(Mutation::deleted(result.rows_affected()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn fields(name: &str, image: &str) -> SectionFields {
        SectionFields {
            name: name.to_string(),
            image: image.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let db = DbService::in_memory().await.unwrap();
        let a = create(&db.pool, fields("Bebidas", "/b.png")).await.unwrap();
        let b = create(&db.pool, fields("Postres", "/p.png")).await.unwrap();

        assert!(a.id > 0);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Bebidas");
        assert_eq!(a.image, "/b.png");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let db = DbService::in_memory().await.unwrap();
        let first = create(&db.pool, fields("Bebidas", "/b.png")).await.unwrap();
        delete(&db.pool, first.id).await.unwrap();

        let second = create(&db.pool, fields("Postres", "/p.png")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let db = DbService::in_memory().await.unwrap();
        let created = create(&db.pool, fields("Bebidas", "/b.png")).await.unwrap();

        let updated = update(&db.pool, created.id, fields("Tragos", "/t.png"))
            .await
            .unwrap();
        assert_eq!(updated.rows_affected, 1);
        assert_eq!(
            updated.row,
            Some(Section {
                id: created.id,
                name: "Tragos".to_string(),
                image: "/t.png".to_string(),
            })
        );
        assert_eq!(find_all(&db.pool).await.unwrap(), vec![updated.row.unwrap()]);
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let db = DbService::in_memory().await.unwrap();
        let existing = create(&db.pool, fields("Bebidas", "/b.png")).await.unwrap();

        let result = update(&db.pool, existing.id + 100, fields("X", "/x.png"))
            .await
            .unwrap();
        assert_eq!(result, Mutation::returning(None));
        assert_eq!(find_all(&db.pool).await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn test_delete_reports_rows() {
        let db = DbService::in_memory().await.unwrap();
        let created = create(&db.pool, fields("Bebidas", "/b.png")).await.unwrap();

        assert_eq!(delete(&db.pool, created.id).await.unwrap().rows_affected, 1);
        assert_eq!(delete(&db.pool, created.id).await.unwrap().rows_affected, 0);
        assert!(find_all(&db.pool).await.unwrap().is_empty());
    }
}
