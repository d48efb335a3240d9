//! Data models
//!
//! Shared between menu-server and menu-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod item;
pub mod menu;
pub mod section;

// Re-exports
pub use item::*;
pub use menu::*;
pub use section::*;
