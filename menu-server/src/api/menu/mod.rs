//! Menu API 模块
//!
//! 单一资源路径，按 HTTP 动词和请求体中的 `type` 分发：
//!
//! | 方法 | 请求体 | 响应 |
//! |------|--------|------|
//! | GET | - | `{ sections, items: { [sectionId]: Item[] } }` |
//! | POST | `{ type, data }` | 新建的 Section / Item |
//! | PUT | `{ type, id, data }` | 更新后的行，或 `null` |
//! | DELETE | `{ type, id }` | `{ success: true }` |

mod handler;
pub mod resource;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/menu",
        get(handler::list)
            .post(handler::create)
            .put(handler::update)
            .delete(handler::delete),
    )
}
