//! Menu Client - data client, state store and views for the menu API
//!
//! - [`http`]: transport trait with network (reqwest) and in-process backends
//! - [`MenuClient`]: typed wrapper over `/api/menu`
//! - [`MenuStore`]: the single in-memory snapshot per client session
//! - [`views`]: read-only browser, administration panel and page shell

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use api::MenuClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use store::{MenuState, MenuStore};

#[cfg(feature = "in-process")]
pub use http::oneshot::OneshotHttpClient;

// Re-export shared types for convenience
pub use shared::{Item, ItemCreate, ItemFields, MenuSnapshot, Section, SectionFields};
