//! Administration panel
//!
//! Same two-level browsing as the menu (no item detail), plus one modal
//! editor per entity kind. Adds and deletes go straight to the store; edits
//! work on a draft that is only sent on commit.

use shared::{Item, ItemFields, MenuSnapshot, Section, SectionFields};

use super::screen::{AdminBody, AdminRow, AdminScreen, ItemDialog, Screen, SectionDialog};
use crate::{HttpClient, MenuStore};

pub const ADMIN_TITLE: &str = "Panel de Administración";
pub const BACK_TO_SECTIONS_LABEL: &str = "Volver a Secciones";
pub const ADD_SECTION_LABEL: &str = "Agregar Sección";
pub const ADD_ITEM_LABEL: &str = "Agregar Oferta";
pub const EDIT_SECTION_TITLE: &str = "Editar Sección";
pub const EDIT_ITEM_TITLE: &str = "Editar Oferta";
pub const SAVE_LABEL: &str = "Guardar Cambios";

/// Fields of a freshly added section
pub fn new_section_fields() -> SectionFields {
    SectionFields {
        name: "Nueva Sección".to_string(),
        image: "/placeholder.svg?height=200&width=200".to_string(),
    }
}

/// Fields of a freshly added item
pub fn new_item_fields() -> ItemFields {
    ItemFields {
        name: "Nuevo Item".to_string(),
        price: "$0.00".to_string(),
        image: "/placeholder.svg?height=80&width=80".to_string(),
        description: "Descripción del nuevo item".to_string(),
    }
}

/// Open section editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEditor {
    pub id: i64,
    pub draft: SectionFields,
}

/// Open item editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEditor {
    pub id: i64,
    pub draft: ItemFields,
}

#[derive(Debug, Clone, Default)]
pub struct AdminPanel {
    selected: Option<Section>,
    section_editor: Option<SectionEditor>,
    item_editor: Option<ItemEditor>,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Browsing ==========

    pub fn selected_section(&self) -> Option<&Section> {
        self.selected.as_ref()
    }

    pub fn enter_section(&mut self, section: &Section) {
        self.selected = Some(section.clone());
    }

    pub fn leave_section(&mut self) {
        self.selected = None;
    }

    // ========== Editors ==========

    pub fn section_editor(&self) -> Option<&SectionEditor> {
        self.section_editor.as_ref()
    }

    pub fn item_editor(&self) -> Option<&ItemEditor> {
        self.item_editor.as_ref()
    }

    /// Open the section editor, replacing any open draft
    pub fn edit_section(&mut self, section: &Section) {
        self.section_editor = Some(SectionEditor {
            id: section.id,
            draft: SectionFields::from(section),
        });
    }

    pub fn section_draft_mut(&mut self) -> Option<&mut SectionFields> {
        self.section_editor.as_mut().map(|e| &mut e.draft)
    }

    pub fn cancel_section_edit(&mut self) {
        self.section_editor = None;
    }

    /// Open the item editor, replacing any open draft
    pub fn edit_item(&mut self, item: &Item) {
        self.item_editor = Some(ItemEditor {
            id: item.id,
            draft: ItemFields::from(item),
        });
    }

    pub fn item_draft_mut(&mut self) -> Option<&mut ItemFields> {
        self.item_editor.as_mut().map(|e| &mut e.draft)
    }

    pub fn cancel_item_edit(&mut self) {
        self.item_editor = None;
    }

    // ========== Store actions ==========

    pub async fn add_section<C: HttpClient>(&self, store: &MenuStore<C>) -> Option<Section> {
        store.create_section(&new_section_fields()).await
    }

    pub async fn delete_section<C: HttpClient>(&self, store: &MenuStore<C>, id: i64) -> bool {
        store.delete_section(id).await
    }

    /// Submit the section draft. The editor closes whatever the outcome.
    pub async fn commit_section<C: HttpClient>(
        &mut self,
        store: &MenuStore<C>,
    ) -> Option<Section> {
        let editor = self.section_editor.take()?;
        store.update_section(editor.id, &editor.draft).await
    }

    /// Add a default item to the open section. Without one nothing is sent.
    pub async fn add_item<C: HttpClient>(&self, store: &MenuStore<C>) -> Option<Item> {
        let section_id = self.selected.as_ref()?.id;
        store.create_item(section_id, &new_item_fields()).await
    }

    pub async fn delete_item<C: HttpClient>(&self, store: &MenuStore<C>, id: i64) -> bool {
        match &self.selected {
            Some(section) => store.delete_item(id, section.id).await,
            None => false,
        }
    }

    /// Submit the item draft. The editor closes whatever the outcome.
    pub async fn commit_item<C: HttpClient>(&mut self, store: &MenuStore<C>) -> Option<Item> {
        let editor = self.item_editor.take()?;
        store.update_item(editor.id, &editor.draft).await
    }

    // ========== Rendering ==========

    pub fn render(&self, snapshot: &MenuSnapshot) -> Screen {
        let body = match &self.selected {
            None => AdminBody::Sections {
                rows: snapshot
                    .sections
                    .iter()
                    .map(|s| AdminRow {
                        id: s.id,
                        name: s.name.clone(),
                        detail: None,
                    })
                    .collect(),
                add_label: ADD_SECTION_LABEL,
            },
            Some(section) => AdminBody::Items {
                back_label: BACK_TO_SECTIONS_LABEL,
                heading: format!("{} - Ofertas", section.name),
                rows: snapshot
                    .items_in(section.id)
                    .iter()
                    .map(|i| AdminRow {
                        id: i.id,
                        name: i.name.clone(),
                        detail: Some(i.price.clone()),
                    })
                    .collect(),
                add_label: ADD_ITEM_LABEL,
            },
        };

        Screen::Admin(AdminScreen {
            title: ADMIN_TITLE,
            body,
            section_dialog: self.section_editor.as_ref().map(|e| SectionDialog {
                title: EDIT_SECTION_TITLE,
                draft: e.draft.clone(),
                submit_label: SAVE_LABEL,
            }),
            item_dialog: self.item_editor.as_ref().map(|e| ItemDialog {
                title: EDIT_ITEM_TITLE,
                draft: e.draft.clone(),
                submit_label: SAVE_LABEL,
            }),
        })
    }
}
