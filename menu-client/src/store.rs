//! Client-side menu state
//!
//! [`MenuStore`] owns the one [`MenuSnapshot`] of a client session. Mutations
//! go to the server first; on success the snapshot is patched in place
//! without a reload, on failure the error is logged and the snapshot is left
//! untouched. Observers follow changes through [`MenuStore::subscribe`].

use shared::{Item, ItemFields, MenuSnapshot, Section, SectionFields};
use tokio::sync::watch;
use tracing::warn;

use crate::{HttpClient, MenuClient};

/// Observable store state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// True until the first load finishes, successfully or not
    pub loading: bool,
    pub snapshot: MenuSnapshot,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            loading: true,
            snapshot: MenuSnapshot::default(),
        }
    }
}

/// Menu state store
pub struct MenuStore<C> {
    client: MenuClient<C>,
    state: watch::Sender<MenuState>,
}

impl<C: HttpClient> MenuStore<C> {
    pub fn new(client: MenuClient<C>) -> Self {
        let (state, _) = watch::channel(MenuState::default());
        Self { client, state }
    }

    pub fn client(&self) -> &MenuClient<C> {
        &self.client
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<MenuState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> MenuState {
        self.state.borrow().clone()
    }

    pub fn snapshot(&self) -> MenuSnapshot {
        self.state.borrow().snapshot.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Replace the snapshot with a full fetch
    pub async fn load(&self) -> bool {
        match self.client.load_all().await {
            Ok(snapshot) => {
                self.state.send_modify(|state| {
                    state.snapshot = snapshot;
                    state.loading = false;
                });
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to load menu data");
                self.state.send_modify(|state| state.loading = false);
                false
            }
        }
    }

    pub async fn create_section(&self, fields: &SectionFields) -> Option<Section> {
        match self.client.create_section(fields).await {
            Ok(section) => {
                self.state
                    .send_modify(|state| state.snapshot.insert_section(section.clone()));
                Some(section)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create section");
                None
            }
        }
    }

    /// `None` when the request failed or no section has `id`
    pub async fn update_section(&self, id: i64, fields: &SectionFields) -> Option<Section> {
        match self.client.update_section(id, fields).await {
            Ok(Some(section)) => {
                self.state.send_if_modified(|state| {
                    state.snapshot.replace_section(section.clone())
                });
                Some(section)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(section_id = id, error = %e, "Failed to update section");
                None
            }
        }
    }

    pub async fn delete_section(&self, id: i64) -> bool {
        match self.client.delete_section(id).await {
            Ok(_) => {
                self.state.send_modify(|state| {
                    state.snapshot.remove_section(id);
                });
                true
            }
            Err(e) => {
                warn!(section_id = id, error = %e, "Failed to delete section");
                false
            }
        }
    }

    pub async fn create_item(&self, section_id: i64, fields: &ItemFields) -> Option<Item> {
        match self.client.create_item(section_id, fields).await {
            Ok(item) => {
                self.state
                    .send_modify(|state| state.snapshot.push_item(section_id, item.clone()));
                Some(item)
            }
            Err(e) => {
                warn!(section_id, error = %e, "Failed to create item");
                None
            }
        }
    }

    pub async fn update_item(&self, id: i64, fields: &ItemFields) -> Option<Item> {
        match self.client.update_item(id, fields).await {
            Ok(Some(item)) => {
                self.state
                    .send_if_modified(|state| state.snapshot.replace_item(item.clone()));
                Some(item)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(item_id = id, error = %e, "Failed to update item");
                None
            }
        }
    }

    pub async fn delete_item(&self, id: i64, section_id: i64) -> bool {
        match self.client.delete_item(id).await {
            Ok(_) => {
                self.state.send_modify(|state| {
                    state.snapshot.remove_item(section_id, id);
                });
                true
            }
            Err(e) => {
                warn!(item_id = id, section_id, error = %e, "Failed to delete item");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use crate::testing::{bebidas_menu as initial, scripted_store as store, sent, server_error};
    use serde_json::{Value, json};

    fn agua_fields() -> ItemFields {
        ItemFields {
            name: "Agua con gas".to_string(),
            price: "$1.50".to_string(),
            image: "/a.png".to_string(),
            description: "Con burbujas".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_replaces_snapshot() {
        let store = store(vec![initial()]);
        assert!(store.is_loading());

        assert!(store.load().await);
        assert!(!store.is_loading());
        assert_eq!(store.snapshot().sections.len(), 1);
        assert_eq!(store.snapshot().items_in(1)[0].name, "Agua");
    }

    #[tokio::test]
    async fn test_failed_load_clears_loading() {
        let store = store(vec![server_error()]);
        let mut rx = store.subscribe();

        assert!(!store.load().await);
        assert!(rx.has_changed().unwrap());
        let state = rx.borrow_and_update().clone();
        assert!(!state.loading);
        assert_eq!(state.snapshot, MenuSnapshot::default());
    }

    #[tokio::test]
    async fn test_create_section_appends_with_empty_items() {
        let store = store(vec![
            initial(),
            Ok(json!({"id": 2, "name": "Postres", "image": "/p.png"})),
        ]);
        store.load().await;

        let fields = SectionFields {
            name: "Postres".to_string(),
            image: "/p.png".to_string(),
        };
        let created = store.create_section(&fields).await.unwrap();
        assert_eq!(created.id, 2);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.sections.last(), Some(&created));
        assert_eq!(snapshot.items.get(&2), Some(&Vec::new()));
        assert_eq!(
            sent(&store)[1],
            ("POST", json!({"type": "section", "data": {"name": "Postres", "image": "/p.png"}}))
        );
    }

    #[tokio::test]
    async fn test_update_section_null_leaves_state() {
        let store = store(vec![initial(), Ok(Value::Null)]);
        store.load().await;
        let before = store.snapshot();

        let fields = SectionFields {
            name: "Nada".to_string(),
            image: "/n.png".to_string(),
        };
        assert!(store.update_section(99, &fields).await.is_none());
        assert_eq!(store.snapshot(), before);
        assert_eq!(sent(&store)[1].1["id"], 99);
    }

    #[tokio::test]
    async fn test_delete_section_drops_local_items() {
        let store = store(vec![initial(), Ok(json!({"success": true}))]);
        store.load().await;

        assert!(store.delete_section(1).await);
        let snapshot = store.snapshot();
        assert!(snapshot.sections.is_empty());
        assert!(snapshot.items.is_empty());
        assert_eq!(sent(&store)[1], ("DELETE", json!({"type": "section", "id": 1})));
    }

    #[tokio::test]
    async fn test_item_mutations_patch_in_place() {
        let store = store(vec![
            initial(),
            Ok(json!({
                "id": 11, "section_id": 1, "name": "Jugo", "price": "$2.00",
                "image": "/j.png", "description": "Natural"
            })),
            Ok(json!({
                "id": 10, "section_id": 1, "name": "Agua con gas", "price": "$1.50",
                "image": "/a.png", "description": "Con burbujas"
            })),
            Ok(json!({"success": true})),
        ]);
        store.load().await;

        let jugo = ItemFields {
            name: "Jugo".to_string(),
            price: "$2.00".to_string(),
            image: "/j.png".to_string(),
            description: "Natural".to_string(),
        };
        store.create_item(1, &jugo).await.unwrap();
        assert_eq!(store.snapshot().items_in(1).len(), 2);
        assert_eq!(sent(&store)[1].1["data"]["section_id"], 1);

        let updated = store.update_item(10, &agua_fields()).await.unwrap();
        assert_eq!(store.snapshot().item(1, 10), Some(&updated));
        assert!(sent(&store)[2].1["data"].get("section_id").is_none());

        assert!(store.delete_item(11, 1).await);
        let ids: Vec<_> = store.snapshot().items_in(1).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10]);
    }

    #[tokio::test]
    async fn test_failures_leave_snapshot_unchanged() {
        let store = store(vec![
            initial(),
            server_error(),
            server_error(),
            Err(ClientError::Validation("Invalid type".to_string())),
            server_error(),
        ]);
        store.load().await;
        let before = store.snapshot();

        assert!(store.create_item(1, &agua_fields()).await.is_none());
        assert!(store.update_item(10, &agua_fields()).await.is_none());
        assert!(!store.delete_item(10, 1).await);
        assert!(!store.delete_section(1).await);
        assert_eq!(store.snapshot(), before);
    }
}
