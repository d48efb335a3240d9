//! Section Model

use serde::{Deserialize, Serialize};

/// Section entity (top-level menu category: drinks, starters, desserts...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Section {
    pub id: i64,
    pub name: String,
    /// Display image URL, stored as-is
    pub image: String,
}

/// Create / update section payload
///
/// Updates overwrite both columns, so the same shape serves POST and PUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFields {
    pub name: String,
    pub image: String,
}

impl From<&Section> for SectionFields {
    fn from(section: &Section) -> Self {
        Self {
            name: section.name.clone(),
            image: section.image.clone(),
        }
    }
}
