//! Menu API Handlers

use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use shared::{DeleteAck, MenuRequest, MenuSnapshot, ROWS_AFFECTED_HEADER};

use super::resource::{MenuRecord, resource_for};
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

const FETCH_FAILED: &str = "Error fetching menu data";
const CREATE_FAILED: &str = "Error creating item";
const UPDATE_FAILED: &str = "Error updating item";
const DELETE_FAILED: &str = "Error deleting item";

/// GET /api/menu - 获取全部分区和按分区分组的菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<MenuSnapshot>> {
    let pool = state.pool();
    let sections = repository::section::find_all(pool)
        .await
        .map_err(|e| AppError::from(e).in_context(FETCH_FAILED))?;
    let items = repository::item::find_all(pool)
        .await
        .map_err(|e| AppError::from(e).in_context(FETCH_FAILED))?;
    Ok(Json(MenuSnapshot::from_rows(sections, items)))
}

/// POST /api/menu - 创建分区或菜品
pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<Json<MenuRecord>> {
    let request = parse_request(&body)?;
    let kind = request.entity_kind()?;
    let record = resource_for(kind)
        .create(state.pool(), request.data)
        .await
        .map_err(|e| e.in_context(CREATE_FAILED))?;
    tracing::info!(kind = %kind, "Menu entry created");
    Ok(Json(record))
}

/// PUT /api/menu - 更新分区或菜品 (id 不存在时返回 null)
pub async fn update(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let request = parse_request(&body)?;
    let kind = request.entity_kind()?;
    let id = require_id(&request)?;
    let mutation = resource_for(kind)
        .update(state.pool(), id, request.data)
        .await
        .map_err(|e| e.in_context(UPDATE_FAILED))?;
    Ok((
        [(ROWS_AFFECTED_HEADER, mutation.rows_affected.to_string())],
        Json(mutation.row),
    ))
}

/// DELETE /api/menu - 删除分区或菜品 (不级联删除菜品)
pub async fn delete(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let request = parse_request(&body)?;
    let kind = request.entity_kind()?;
    let id = require_id(&request)?;
    let mutation = resource_for(kind)
        .delete(state.pool(), id)
        .await
        .map_err(|e| e.in_context(DELETE_FAILED))?;
    tracing::info!(kind = %kind, id, rows = mutation.rows_affected, "Menu entry deleted");
    Ok((
        [(ROWS_AFFECTED_HEADER, mutation.rows_affected.to_string())],
        Json(DeleteAck::ok()),
    ))
}

/// Decode the envelope whatever the `Content-Type`
fn parse_request(body: &[u8]) -> AppResult<MenuRequest> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))
}

fn require_id(request: &MenuRequest) -> AppResult<i64> {
    request
        .id
        .ok_or_else(|| AppError::validation("Missing id"))
}
