//! In-memory item registry.
//!
//! # Indexes
//!
//! ```text
//! by_id           HashMap<ItemId, Item>          owns every item exactly once
//! by_description  BTreeSet<(String, ItemId)>     sorted (description, id) keys
//! ```
//!
//! The description index stores keys only and resolves them through `by_id`
//! when enumerating, so there is a single copy of each item. Keying by
//! `(description, id)` keeps items that share a description; they list in id
//! order among themselves.
//!
//! Every mutation touches both indexes before returning, and a rejected call
//! touches neither.

use std::collections::{BTreeSet, HashMap};

use crate::error::RegistryError;
use crate::types::{Item, ItemId};

/// The aggregate owning all stored items.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    by_id: HashMap<ItemId, Item>,
    by_description: BTreeSet<(String, ItemId)>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Mutations
    // -----------------------------------------------------------------------

    /// Insert `item` into both indexes.
    ///
    /// Returns `RegistryError::DuplicateItem` if an item with the same id is
    /// already present; nothing is inserted in that case.
    pub fn add_item(&mut self, item: Item) -> Result<(), RegistryError> {
        if self.by_id.contains_key(item.id()) {
            let err = RegistryError::DuplicateItem {
                id: item.id().clone(),
            };
            tracing::debug!(error = %err, "add rejected");
            return Err(err);
        }

        tracing::debug!(id = %item.id(), description = item.description(), "adding item");
        self.by_description
            .insert((item.description().to_owned(), item.id().clone()));
        self.by_id.insert(item.id().clone(), item);
        Ok(())
    }

    /// Remove the item registered under `id` from both indexes and hand it back.
    ///
    /// Only the `(description, id)` key of the removed item is dropped from the
    /// description index; other items sharing its description stay listed.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<Item, RegistryError> {
        let Some(item) = self.by_id.remove(id) else {
            let err = not_found(id);
            tracing::debug!(error = %err, "remove rejected");
            return Err(err);
        };

        self.by_description
            .remove(&(item.description().to_owned(), item.id().clone()));
        tracing::debug!(id = %item.id(), "removed item");
        Ok(item)
    }

    // -----------------------------------------------------------------------
    // 2. Queries
    // -----------------------------------------------------------------------

    /// Exact, case-sensitive lookup.
    pub fn find_by_id(&self, id: &ItemId) -> Result<&Item, RegistryError> {
        self.by_id.get(id).ok_or_else(|| not_found(id))
    }

    /// All items, ordered by description ascending (byte order), then by id.
    pub fn list_by_description(&self) -> Vec<&Item> {
        self.by_description
            .iter()
            .filter_map(|(_, id)| self.by_id.get(id))
            .collect()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

fn not_found(id: &ItemId) -> RegistryError {
    RegistryError::ItemNotFound { id: id.clone() }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
