//! Per-entity dispatch table
//!
//! Each [`EntityKind`] is served by one [`MenuResource`]. Handlers resolve
//! the `type` tag once and call through the trait; section and item logic
//! never share a branch.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::EntityKind;
use shared::models::{Item, ItemCreate, ItemFields, Section, SectionFields};
use sqlx::SqlitePool;

use crate::db::repository::{self, Mutation};
use crate::utils::{AppError, AppResult};

/// Row returned by a create or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuRecord {
    Section(Section),
    Item(Item),
}

#[async_trait]
pub trait MenuResource: Send + Sync {
    async fn create(&self, pool: &SqlitePool, data: Option<serde_json::Value>) -> AppResult<MenuRecord>;

    async fn update(
        &self,
        pool: &SqlitePool,
        id: i64,
        data: Option<serde_json::Value>,
    ) -> AppResult<Mutation<MenuRecord>>;

    async fn delete(&self, pool: &SqlitePool, id: i64) -> AppResult<Mutation<()>>;
}

/// Resolve the resource serving `kind`
pub fn resource_for(kind: EntityKind) -> &'static dyn MenuResource {
    match kind {
        EntityKind::Section => &SectionResource,
        EntityKind::Item => &ItemResource,
    }
}

/// Decode the `data` member into the payload the resource expects
fn decode<T: DeserializeOwned>(kind: EntityKind, data: Option<serde_json::Value>) -> AppResult<T> {
    let data = data.ok_or_else(|| AppError::validation(format!("Missing data for {kind}")))?;
    serde_json::from_value(data)
        .map_err(|e| AppError::validation(format!("Invalid {kind} data: {e}")))
}

pub struct SectionResource;

#[async_trait]
impl MenuResource for SectionResource {
    async fn create(&self, pool: &SqlitePool, data: Option<serde_json::Value>) -> AppResult<MenuRecord> {
        let fields: SectionFields = decode(EntityKind::Section, data)?;
        let section = repository::section::create(pool, fields).await?;
        Ok(MenuRecord::Section(section))
    }

    async fn update(
        &self,
        pool: &SqlitePool,
        id: i64,
        data: Option<serde_json::Value>,
    ) -> AppResult<Mutation<MenuRecord>> {
        let fields: SectionFields = decode(EntityKind::Section, data)?;
        let mutation = repository::section::update(pool, id, fields).await?;
        Ok(mutation.map(MenuRecord::Section))
    }

    async fn delete(&self, pool: &SqlitePool, id: i64) -> AppResult<Mutation<()>> {
        Ok(repository::section::delete(pool, id).await?)
    }
}

pub struct ItemResource;

#[async_trait]
impl MenuResource for ItemResource {
    async fn create(&self, pool: &SqlitePool, data: Option<serde_json::Value>) -> AppResult<MenuRecord> {
        let payload: ItemCreate = decode(EntityKind::Item, data)?;
        let item = repository::item::create(pool, payload).await?;
        Ok(MenuRecord::Item(item))
    }

    async fn update(
        &self,
        pool: &SqlitePool,
        id: i64,
        data: Option<serde_json::Value>,
    ) -> AppResult<Mutation<MenuRecord>> {
        let fields: ItemFields = decode(EntityKind::Item, data)?;
        let mutation = repository::item::update(pool, id, fields).await?;
        Ok(mutation.map(MenuRecord::Item))
    }

    async fn delete(&self, pool: &SqlitePool, id: i64) -> AppResult<Mutation<()>> {
        Ok(repository::item::delete(pool, id).await?)
    }
}
