//! Menu snapshot
//!
//! The `GET /api/menu` body and the client-side aggregate: sections in store
//! order plus items grouped by `section_id`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Item, Section};

/// Full menu: `{ sections, items: { [sectionId]: Item[] } }`
///
/// JSON object keys are strings, serde_json maps them to and from `i64`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSnapshot {
    pub sections: Vec<Section>,
    pub items: BTreeMap<i64, Vec<Item>>,
}

impl MenuSnapshot {
    /// Build a snapshot from flat rows, grouping items by `section_id`.
    ///
    /// Item order inside a group follows the input order. Sections without
    /// items get no entry; items whose section is gone keep theirs.
    pub fn from_rows(sections: Vec<Section>, items: Vec<Item>) -> Self {
        let mut grouped: BTreeMap<i64, Vec<Item>> = BTreeMap::new();
        for item in items {
            grouped.entry(item.section_id).or_default().push(item);
        }
        Self {
            sections,
            items: grouped,
        }
    }

    pub fn section(&self, id: i64) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Items of a section, empty when the section has none
    pub fn items_in(&self, section_id: i64) -> &[Item] {
        self.items
            .get(&section_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn item(&self, section_id: i64, item_id: i64) -> Option<&Item> {
        self.items_in(section_id).iter().find(|i| i.id == item_id)
    }

    /// Items grouped under a section id that has no section
    pub fn orphaned_items(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|(section_id, _)| self.section(**section_id).is_none())
            .flat_map(|(_, items)| items.iter())
    }

    // ========== Incremental patches ==========

    /// Append a freshly created section with an empty item list
    pub fn insert_section(&mut self, section: Section) {
        self.items.insert(section.id, Vec::new());
        self.sections.push(section);
    }

    /// Replace the section with the same id. Returns false if absent.
    pub fn replace_section(&mut self, section: Section) -> bool {
        match self.sections.iter_mut().find(|s| s.id == section.id) {
            Some(slot) => {
                *slot = section;
                true
            }
            None => false,
        }
    }

    /// Drop a section together with its local item list
    pub fn remove_section(&mut self, id: i64) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        self.items.remove(&id);
        self.sections.len() != before
    }

    pub fn push_item(&mut self, section_id: i64, item: Item) {
        self.items.entry(section_id).or_default().push(item);
    }

    /// Replace the item with the same id under its own `section_id`
    pub fn replace_item(&mut self, item: Item) -> bool {
        let Some(items) = self.items.get_mut(&item.section_id) else {
            return false;
        };
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, section_id: i64, item_id: i64) -> bool {
        let Some(items) = self.items.get_mut(&section_id) else {
            return false;
        };
        let before = items.len();
        items.retain(|i| i.id != item_id);
        items.len() != before
    }
}
