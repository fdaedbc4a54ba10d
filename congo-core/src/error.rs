//! Error types for congo-core.

use thiserror::Error;

use crate::types::ItemId;

/// All errors that can arise from registry operations.
///
/// Both variants are recoverable; the registry is left unchanged when either is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `add_item` was called with an id that is already registered.
    #[error("Item with ID {id} already exists!")]
    DuplicateItem { id: ItemId },

    /// `find_by_id` / `remove_item` was called with an id that is not registered.
    #[error("Item with ID {id} not found!")]
    ItemNotFound { id: ItemId },
}

impl RegistryError {
    /// The id the failed operation was called with.
    pub fn id(&self) -> &ItemId {
        match self {
            RegistryError::DuplicateItem { id } | RegistryError::ItemNotFound { id } => id,
        }
    }
}
