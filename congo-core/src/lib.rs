//! Congo core library — item entity, in-memory registry, errors.
//!
//! Public API surface:
//! - [`types`] — [`ItemId`] newtype and the [`Item`] entity
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — [`Registry`] with its id and description indexes

pub mod error;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use registry::Registry;
pub use types::{Item, ItemId};
