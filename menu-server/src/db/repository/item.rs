//! Item Repository

use super::{Mutation, RepoResult};
use shared::models::{Item, ItemCreate, ItemFields};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, section_id, name, price, image, description";

/// All items in store order (no ORDER BY), orphans included
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(&format!("SELECT {COLUMNS} FROM items"))
        .fetch_all(pool)
        .await?;
    Ok(items)
}

/// Insert an item. `section_id` is stored as given, without checking that
/// the section exists.
pub async fn create(pool: &SqlitePool, data: ItemCreate) -> RepoResult<Item> {
    let item = sqlx::query_as::<_, Item>(&format!(
        "INSERT INTO items (section_id, name, price, image, description) VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(data.section_id)
    .bind(data.name)
    .bind(data.price)
    .bind(data.image)
    .bind(data.description)
    .fetch_one(pool)
    .await?;
    tracing::debug!(item_id = item.id, section_id = item.section_id, "Item created");
    Ok(item)
}

/// Overwrite the mutable columns. `section_id` is never touched.
pub async fn update(pool: &SqlitePool, id: i64, data: ItemFields) -> RepoResult<Mutation<Item>> {
    let item = sqlx::query_as::<_, Item>(&format!(
        "UPDATE items SET name = ?, price = ?, image = ?, description = ? WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(data.name)
    .bind(data.price)
    .bind(data.image)
    .bind(data.description)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    if item.is_none() {
        tracing::debug!(item_id = id, "Item update matched no row");
    }
    Ok(Mutation::returning(item))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<Mutation<()>> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    tracing::debug!(item_id = id, rows = result.rows_affected(), "Item delete");
    Ok(Mutation::deleted(result.rows_affected()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::section;
    use shared::models::SectionFields;

    fn agua(section_id: i64) -> ItemCreate {
        ItemCreate {
            section_id,
            name: "Agua".to_string(),
            price: "$1.00".to_string(),
            image: "/a.png".to_string(),
            description: "Agua mineral".to_string(),
        }
    }

    async fn bebidas(db: &DbService) -> i64 {
        section::create(
            &db.pool,
            SectionFields {
                name: "Bebidas".to_string(),
                image: "/b.png".to_string(),
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_create_keeps_fields_verbatim() {
        let db = DbService::in_memory().await.unwrap();
        let section_id = bebidas(&db).await;

        let item = create(&db.pool, agua(section_id)).await.unwrap();
        assert!(item.id > 0);
        assert_eq!(item.section_id, section_id);
        assert_eq!(item.price, "$1.00");
        assert_eq!(find_all(&db.pool).await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_update_never_moves_item() {
        let db = DbService::in_memory().await.unwrap();
        let section_id = bebidas(&db).await;
        let item = create(&db.pool, agua(section_id)).await.unwrap();

        let updated = update(
            &db.pool,
            item.id,
            ItemFields {
                name: "Agua con gas".to_string(),
                price: "$1.50".to_string(),
                image: "/g.png".to_string(),
                description: "Con burbujas".to_string(),
            },
        )
        .await
        .unwrap();

        let row = updated.row.unwrap();
        assert_eq!(updated.rows_affected, 1);
        assert_eq!(row.id, item.id);
        assert_eq!(row.section_id, section_id);
        assert_eq!(row.name, "Agua con gas");
        assert_eq!(row.description, "Con burbujas");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_noops() {
        let db = DbService::in_memory().await.unwrap();
        let section_id = bebidas(&db).await;
        let item = create(&db.pool, agua(section_id)).await.unwrap();

        let missing = item.id + 1;
        let updated = update(&db.pool, missing, ItemFields::from(&item)).await.unwrap();
        assert_eq!(updated.row, None);
        assert_eq!(updated.rows_affected, 0);
        assert_eq!(delete(&db.pool, missing).await.unwrap().rows_affected, 0);
        assert_eq!(find_all(&db.pool).await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_section_delete_leaves_orphans() {
        let db = DbService::in_memory().await.unwrap();
        let section_id = bebidas(&db).await;
        let item = create(&db.pool, agua(section_id)).await.unwrap();

        let deleted = section::delete(&db.pool, section_id).await.unwrap();
        assert_eq!(deleted.rows_affected, 1);

        let items = find_all(&db.pool).await.unwrap();
        assert_eq!(items, vec![item]);
        assert_eq!(items[0].section_id, section_id);
    }

    #[tokio::test]
    async fn test_create_under_unknown_section() {
        let db = DbService::in_memory().await.unwrap();
        let item = create(&db.pool, agua(42)).await.unwrap();
        assert_eq!(item.section_id, 42);
    }
}
