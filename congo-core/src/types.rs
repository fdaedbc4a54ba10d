//! Domain types for the Congo item registry.
//!
//! An [`Item`] is built once with all three fields and never mutated afterwards;
//! the registry hands out shared references only.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed, case-sensitive identifier for a stored item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One stored physical object.
///
/// `description` is not unique; `location` is free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    description: String,
    location: String,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ItemId::from("A1").to_string(), "A1");
    }

    #[test]
    fn newtype_equality_is_case_sensitive() {
        assert_eq!(ItemId::from("x"), ItemId::from(String::from("x")));
        assert_ne!(ItemId::from("x"), ItemId::from("X"));
    }

    #[test]
    fn item_accessors_return_constructed_fields() {
        let item = Item::new("A1", "Widget", "Shelf1");
        assert_eq!(item.id(), &ItemId::from("A1"));
        assert_eq!(item.description(), "Widget");
        assert_eq!(item.location(), "Shelf1");
    }

    #[test]
    fn empty_fields_are_allowed() {
        let item = Item::new("", "", "");
        assert_eq!(item.id().0, "");
        assert!(item.description().is_empty());
        assert!(item.location().is_empty());
    }
}
