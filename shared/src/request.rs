//! Request types for `/api/menu`
//!
//! Every mutation shares one envelope: `{ type, id?, data? }`. The `type`
//! stays a plain string on the wire so the server can answer an unknown tag
//! with a client error instead of a decode failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entity discriminator carried in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Section,
    Item,
}

impl EntityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Item => "item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `type` value that names no entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid type: {0:?}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "section" => Ok(Self::Section),
            "item" => Ok(Self::Item),
            other => Err(UnknownEntityKind(other.to_string())),
        }
    }
}

/// Mutation envelope
///
/// | Verb | Fields |
/// |------|--------|
/// | POST | `type`, `data` |
/// | PUT | `type`, `id`, `data` |
/// | DELETE | `type`, `id` |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRequest<T = serde_json::Value> {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> MenuRequest<T> {
    pub fn create(kind: EntityKind, data: T) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            id: None,
            data: Some(data),
        }
    }

    pub fn update(kind: EntityKind, id: i64, data: T) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            id: Some(id),
            data: Some(data),
        }
    }

    pub fn delete(kind: EntityKind, id: i64) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            id: Some(id),
            data: None,
        }
    }

    /// Resolve the `type` tag
    pub fn entity_kind(&self) -> Result<EntityKind, UnknownEntityKind> {
        self.kind.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SectionFields;
    use serde_json::json;

    #[test]
    fn test_entity_kind_parse() {
        assert_eq!("section".parse::<EntityKind>(), Ok(EntityKind::Section));
        assert_eq!("item".parse::<EntityKind>(), Ok(EntityKind::Item));
        assert_eq!(
            "Section".parse::<EntityKind>(),
            Err(UnknownEntityKind("Section".to_string()))
        );
    }

    #[test]
    fn test_create_envelope_shape() {
        let request = MenuRequest::create(
            EntityKind::Section,
            SectionFields {
                name: "Bebidas".to_string(),
                image: "/b.png".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "section", "data": {"name": "Bebidas", "image": "/b.png"}})
        );
    }

    #[test]
    fn test_delete_envelope_shape() {
        let request = MenuRequest::<()>::delete(EntityKind::Item, 4);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "item", "id": 4})
        );
    }

    #[test]
    fn test_unknown_type_still_decodes() {
        let request: MenuRequest =
            serde_json::from_value(json!({"type": "combo", "id": 1})).unwrap();
        assert_eq!(request.id, Some(1));
        assert!(request.data.is_none());
        assert_eq!(
            request.entity_kind(),
            Err(UnknownEntityKind("combo".to_string()))
        );
    }
}
