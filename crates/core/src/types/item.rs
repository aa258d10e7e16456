//! The menu item record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, ItemId};

/// A menu item.
///
/// Items are never removed from the collection; deletion flips `is_deleted`
/// so the record stays addressable by its ID forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier, immutable after creation.
    pub id: ItemId,
    /// Display name. Unique among non-deleted items after normalization.
    pub name: String,
    /// Course this item belongs to.
    pub category: Category,
    /// Price in the menu's currency, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Whether the item can currently be ordered.
    pub is_available: bool,
    /// Soft-delete flag. One-way: once true the record is frozen.
    pub is_deleted: bool,
    /// When the item was created (UTC).
    pub created_at: DateTime<Utc>,
    /// When the item was last mutated (UTC). Always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// The normalized form of this item's name.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a name for uniqueness comparison: trim surrounding whitespace
/// and lowercase. Used only for comparison, never for display.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
