//! Storage abstraction for menu items.
//!
//! Handlers only talk to the [`ItemStore`] trait, so the in-memory backend
//! can later be swapped for a real database without touching handler logic.

use menu_api_core::{Category, Item, ItemId};
use rust_decimal::Decimal;
use thiserror::Error;

pub mod memory;

pub use memory::InMemoryItemStore;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item with the given ID exists.
    #[error("item not found")]
    NotFound,

    /// A non-deleted item already holds this normalized name.
    #[error("an item named {0:?} already exists")]
    DuplicateName(String),

    /// The item is soft-deleted and can no longer be mutated.
    #[error("item is deleted")]
    Deleted,

    /// The store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Input for creating an item.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub is_available: bool,
}

/// A partial update to an item.
///
/// `None` means "leave this field untouched", which is distinct from a
/// `Some` holding an empty or falsy value - `Some(false)` for
/// `is_available` is applied, an absent field is not.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
}

/// Storage interface for menu items.
pub trait ItemStore: Send + Sync {
    /// List items in insertion order.
    ///
    /// Soft-deleted items are only included when `include_deleted` is true.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the store lock is poisoned.
    fn list(&self, include_deleted: bool) -> Result<Vec<Item>, StoreError>;

    /// Create a new item, assigning its ID and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateName` if a non-deleted item already
    /// holds the normalized name.
    fn create(&self, new_item: NewItem) -> Result<Item, StoreError>;

    /// Apply a partial update to an item.
    ///
    /// Only the `Some` fields of the patch are written. Renames are not
    /// re-checked against the uniqueness index.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown ID and
    /// `StoreError::Deleted` if the item is already soft-deleted.
    fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, StoreError>;

    /// Soft-delete an item.
    ///
    /// The record stays in the collection and keeps its ID; its name becomes
    /// reusable. Deleting an already-deleted item is a no-op that returns
    /// the record unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown ID.
    fn soft_delete(&self, id: ItemId) -> Result<Item, StoreError>;
}
