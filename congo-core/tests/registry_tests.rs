//! Registry behaviour tests: add / find / remove / list scenarios and error messages.

use congo_core::{Item, ItemId, Registry, RegistryError};
use rstest::rstest;

fn id(s: &str) -> ItemId {
    ItemId::from(s)
}

fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.id().0.clone()).collect()
}

// ---------------------------------------------------------------------------
// 1. Listing order
// ---------------------------------------------------------------------------

#[test]
fn list_orders_by_description_not_insertion() {
    let mut reg = Registry::new();
    reg.add_item(Item::new("A1", "Widget", "Shelf1")).expect("add A1");
    reg.add_item(Item::new("A2", "Gadget", "Shelf2")).expect("add A2");

    let listed = reg.list_by_description();
    assert_eq!(ids(&listed), ["A2", "A1"]);
    assert_eq!(listed[0].description(), "Gadget");
    assert_eq!(listed[1].description(), "Widget");
}

#[rstest]
#[case::uppercase_before_lowercase(&["apple", "Banana", "cherry"], &["Banana", "apple", "cherry"])]
#[case::prefix_sorts_first(&["Boxes", "Box", "Bo"], &["Bo", "Box", "Boxes"])]
#[case::empty_description_first(&["Crate", ""], &["", "Crate"])]
#[case::non_ascii_after_ascii(&["Étagère", "Zinc", "Anvil"], &["Anvil", "Zinc", "Étagère"])]
fn list_uses_byte_order(#[case] descriptions: &[&str], #[case] expected: &[&str]) {
    let mut reg = Registry::new();
    for (n, description) in descriptions.iter().enumerate() {
        reg.add_item(Item::new(format!("id-{n}"), *description, "loc"))
            .expect("add");
    }
    let got: Vec<&str> = reg
        .list_by_description()
        .iter()
        .map(|item| item.description())
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn shared_description_keeps_every_item_ordered_by_id() {
    let mut reg = Registry::new();
    reg.add_item(Item::new("T3", "Tote", "Aisle 3")).expect("add");
    reg.add_item(Item::new("T1", "Tote", "Aisle 1")).expect("add");
    reg.add_item(Item::new("T2", "Tote", "Aisle 2")).expect("add");
    reg.add_item(Item::new("S1", "Sack", "Aisle 9")).expect("add");

    assert_eq!(reg.len(), 4);
    assert_eq!(ids(&reg.list_by_description()), ["S1", "T1", "T2", "T3"]);
}

// ---------------------------------------------------------------------------
// 2. Duplicates
// ---------------------------------------------------------------------------

#[test]
fn duplicate_id_is_rejected_and_first_item_kept() {
    let mut reg = Registry::new();
    reg.add_item(Item::new("X", "Original", "Bay 1")).expect("add");

    let err = reg
        .add_item(Item::new("X", "Replacement", "Bay 2"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateItem { .. }), "got: {err}");
    assert_eq!(err.id(), &id("X"));
    assert_eq!(err.to_string(), "Item with ID X already exists!");

    assert_eq!(reg.len(), 1);
    let kept = reg.find_by_id(&id("X")).expect("find");
    assert_eq!(kept.description(), "Original");
    assert_eq!(kept.location(), "Bay 1");
    assert_eq!(ids(&reg.list_by_description()), ["X"]);
}

// ---------------------------------------------------------------------------
// 3. Not found
// ---------------------------------------------------------------------------

#[test]
fn empty_registry_find_fails_and_list_is_empty() {
    let reg = Registry::new();
    let err = reg.find_by_id(&id("missing")).unwrap_err();
    assert_eq!(err, RegistryError::ItemNotFound { id: id("missing") });
    assert_eq!(err.to_string(), "Item with ID missing not found!");
    assert!(reg.list_by_description().is_empty());
}

#[test]
fn second_remove_fails_with_not_found() {
    let mut reg = Registry::new();
    reg.add_item(Item::new("B1", "Bracket", "Drawer")).expect("add");
    reg.remove_item(&id("B1")).expect("first remove");

    let err = reg.remove_item(&id("B1")).unwrap_err();
    assert!(matches!(err, RegistryError::ItemNotFound { .. }), "got: {err}");
    assert!(reg.is_empty());
}

#[test]
fn remove_missing_leaves_size_unchanged() {
    let mut reg = Registry::new();
    reg.add_item(Item::new("K1", "Key", "Hook")).expect("add");
    assert!(reg.remove_item(&id("K2")).is_err());
    assert_eq!(reg.len(), 1);
    assert_eq!(ids(&reg.list_by_description()), ["K1"]);
}

#[test]
fn removed_item_is_gone_from_find_and_list() {
    let mut reg = Registry::new();
    reg.add_item(Item::new("A1", "Widget", "Shelf1")).expect("add");
    reg.add_item(Item::new("A2", "Gadget", "Shelf2")).expect("add");

    let removed = reg.remove_item(&id("A1")).expect("remove");
    assert_eq!(removed, Item::new("A1", "Widget", "Shelf1"));
    assert!(reg.find_by_id(&id("A1")).is_err());
    assert_eq!(ids(&reg.list_by_description()), ["A2"]);
}

#[test]
fn id_can_be_reused_after_removal() {
    let mut reg = Registry::new();
    reg.add_item(Item::new("R", "Old", "Here")).expect("add");
    reg.remove_item(&id("R")).expect("remove");
    reg.add_item(Item::new("R", "New", "There")).expect("re-add");
    assert_eq!(reg.find_by_id(&id("R")).expect("find").description(), "New");
    assert_eq!(reg.len(), 1);
}

// ---------------------------------------------------------------------------
// 4. Serialization
// ---------------------------------------------------------------------------

#[test]
fn item_serializes_with_flat_id() {
    let json = serde_json::to_value(Item::new("A1", "Widget", "Shelf1")).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "id": "A1", "description": "Widget", "location": "Shelf1" })
    );
}
