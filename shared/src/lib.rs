//! Shared types for the menu workspace
//!
//! Data models, the `/api/menu` request envelope and response bodies used by
//! both `menu-server` and `menu-client`.

pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use models::{Item, ItemCreate, ItemFields, MenuSnapshot, Section, SectionFields};
pub use request::{EntityKind, MenuRequest, UnknownEntityKind};
pub use response::{DeleteAck, ErrorBody, ROWS_AFFECTED_HEADER};
