//! Item Model

use serde::{Deserialize, Serialize};

/// Item entity (a single offering inside a section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i64,
    /// Owning section. Not enforced by the store: items survive the
    /// deletion of their section.
    pub section_id: i64,
    pub name: String,
    /// Display price, e.g. `"$0.00"`. Never parsed.
    pub price: String,
    pub image: String,
    pub description: String,
}

/// Create item payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub section_id: i64,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
}

/// Update item payload
///
/// There is no `section_id`: an item cannot move between sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
}

impl From<&Item> for ItemFields {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.clone(),
            image: item.image.clone(),
            description: item.description.clone(),
        }
    }
}

impl ItemFields {
    /// Attach the fields to a section, producing a create payload
    pub fn into_create(self, section_id: i64) -> ItemCreate {
        ItemCreate {
            section_id,
            name: self.name,
            price: self.price,
            image: self.image,
            description: self.description,
        }
    }
}
