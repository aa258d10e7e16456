//! In-memory item store.
//!
//! A single `RwLock` guards the whole collection: reads share the lock,
//! every mutation takes it exclusively, so the check-then-act on the name
//! index is atomic.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use indexmap::IndexMap;

use menu_api_core::{Item, ItemId, normalize_name};

use super::{ItemPatch, ItemStore, NewItem, StoreError};

/// In-memory [`ItemStore`] backend.
#[derive(Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Every item ever created, keyed by ID, in insertion order.
    items: IndexMap<ItemId, Item>,
    /// Normalized name -> ID. Non-deleted items only.
    names: HashMap<String, ItemId>,
}

impl InMemoryItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self, include_deleted: bool) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .items
            .values()
            .filter(|item| include_deleted || !item.is_deleted)
            .cloned()
            .collect())
    }

    fn create(&self, new_item: NewItem) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let normalized = normalize_name(&new_item.name);
        if inner.names.contains_key(&normalized) {
            return Err(StoreError::DuplicateName(new_item.name));
        }

        let now = Utc::now();
        let item = Item {
            id: ItemId::generate(),
            name: new_item.name,
            category: new_item.category,
            price: new_item.price,
            is_available: new_item.is_available,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        inner.names.insert(normalized, item.id);
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Inner { items, names } = &mut *inner;

        let item = items.get_mut(&id).ok_or(StoreError::NotFound)?;
        if item.is_deleted {
            return Err(StoreError::Deleted);
        }

        if let Some(name) = patch.name {
            let old = normalize_name(&item.name);
            let new = normalize_name(&name);
            if old != new {
                // Renames skip the uniqueness check; the index tracks the
                // most recent holder of each name. Only drop the old entry
                // while it still points at this item.
                if names.get(&old) == Some(&id) {
                    names.remove(&old);
                }
                names.insert(new, id);
            }
            item.name = name;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(is_available) = patch.is_available {
            item.is_available = is_available;
        }

        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    fn soft_delete(&self, id: ItemId) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Inner { items, names } = &mut *inner;

        let item = items.get_mut(&id).ok_or(StoreError::NotFound)?;
        if item.is_deleted {
            // Already deleted: the record is frozen, return it unchanged.
            return Ok(item.clone());
        }

        item.is_deleted = true;
        item.updated_at = Utc::now();

        let normalized = normalize_name(&item.name);
        if names.get(&normalized) == Some(&id) {
            names.remove(&normalized);
        }

        Ok(item.clone())
    }
}
