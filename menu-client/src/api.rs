//! Typed wrapper over `/api/menu`

use shared::{
    DeleteAck, EntityKind, Item, ItemFields, MenuRequest, MenuSnapshot, Section, SectionFields,
};

use crate::{ClientResult, HttpClient};

/// Menu endpoint path
pub const MENU_PATH: &str = "/api/menu";

/// Menu API client
///
/// One method per verb and entity. Not-found on update is not an error:
/// the server answers `null`, surfaced here as `None`.
#[derive(Debug, Clone)]
pub struct MenuClient<C> {
    http: C,
}

impl<C: HttpClient> MenuClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// 获取底层传输
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Fetch every section and every item
    pub async fn load_all(&self) -> ClientResult<MenuSnapshot> {
        self.http.get(MENU_PATH).await
    }

    pub async fn create_section(&self, fields: &SectionFields) -> ClientResult<Section> {
        let request = MenuRequest::create(EntityKind::Section, fields);
        self.http.post(MENU_PATH, &request).await
    }

    pub async fn update_section(
        &self,
        id: i64,
        fields: &SectionFields,
    ) -> ClientResult<Option<Section>> {
        let request = MenuRequest::update(EntityKind::Section, id, fields);
        self.http.put(MENU_PATH, &request).await
    }

    pub async fn delete_section(&self, id: i64) -> ClientResult<DeleteAck> {
        let request = MenuRequest::<()>::delete(EntityKind::Section, id);
        self.http.delete_with_body(MENU_PATH, &request).await
    }

    /// Create an item under `section_id`
    pub async fn create_item(&self, section_id: i64, fields: &ItemFields) -> ClientResult<Item> {
        let request = MenuRequest::create(EntityKind::Item, fields.clone().into_create(section_id));
        self.http.post(MENU_PATH, &request).await
    }

    /// The item keeps its section; only its own fields change.
    pub async fn update_item(&self, id: i64, fields: &ItemFields) -> ClientResult<Option<Item>> {
        let request = MenuRequest::update(EntityKind::Item, id, fields);
        self.http.put(MENU_PATH, &request).await
    }

    pub async fn delete_item(&self, id: i64) -> ClientResult<DeleteAck> {
        let request = MenuRequest::<()>::delete(EntityKind::Item, id);
        self.http.delete_with_body(MENU_PATH, &request).await
    }
}
