//! Node mutation tests

use pagecraft_editor::{tree, Document, MutationError, Node, SequentialIds};
use serde_json::json;
use std::collections::HashSet;

fn seeded() -> Document {
    Document::with_id_generator(Box::new(SequentialIds::new("gen")))
}

/// section(s)
///   ├─ text(t1)
///   └─ row(r)
///        ├─ button(b1)
///        └─ button(b2)
/// text(t2)
fn populated() -> Document {
    let mut doc = seeded();
    doc.add_node(Node::new("s", "section"), None).unwrap();
    doc.add_node(Node::new("t1", "text").with_prop("text", "Hello"), Some("s")).unwrap();
    doc.add_node(Node::new("r", "row"), Some("s")).unwrap();
    doc.add_node(Node::new("b1", "button").with_prop("label", "One"), Some("r")).unwrap();
    doc.add_node(Node::new("b2", "button").with_prop("label", "Two"), Some("r")).unwrap();
    doc.add_node(Node::new("t2", "text"), None).unwrap();
    doc
}

fn strip_ids(node: &Node) -> serde_json::Value {
    let mut value = serde_json::to_value(node).unwrap();
    fn strip(value: &mut serde_json::Value) {
        if let Some(obj) = value.as_object_mut() {
            obj.remove("id");
            if let Some(children) = obj.get_mut("children").and_then(|c| c.as_array_mut()) {
                children.iter_mut().for_each(strip);
            }
        }
    }
    strip(&mut value);
    value
}

#[test]
fn test_add_to_root_appends() {
    let doc = populated();
    let ids: Vec<_> = doc.screen().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["s", "t2"]);
}

#[test]
fn test_add_under_leaf_creates_children() {
    let mut doc = populated();
    assert!(doc.find_node("t2").unwrap().children.is_none());

    doc.add_node(Node::new("icon", "icon"), Some("t2")).unwrap();

    let t2 = doc.find_node("t2").unwrap();
    assert_eq!(t2.children().len(), 1);
    assert_eq!(t2.children()[0].id, "icon");
}

#[test]
fn test_add_under_missing_parent_is_noop() {
    let mut doc = populated();
    let before = doc.pages().to_vec();

    let err = doc.add_node(Node::new("x", "text"), Some("ghost")).unwrap_err();

    assert_eq!(err, MutationError::ParentNotFound("ghost".to_string()));
    assert_eq!(doc.pages(), &before[..]);
}

#[test]
fn test_add_then_delete_restores_tree() {
    let mut doc = populated();
    let before = doc.pages().to_vec();

    doc.add_node(Node::new("fresh", "badge"), Some("r")).unwrap();
    assert!(doc.find_node("fresh").is_some());

    let removed = doc.delete_node("fresh").unwrap();
    assert_eq!(removed.id, "fresh");
    assert_eq!(doc.pages(), &before[..]);
}

#[test]
fn test_delete_nested_preserves_sibling_order() {
    let mut doc = populated();
    doc.add_node(Node::new("b3", "button"), Some("r")).unwrap();

    doc.delete_node("b2").unwrap();

    let row = doc.find_node("r").unwrap();
    let ids: Vec<_> = row.children().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b3"]);
}

#[test]
fn test_delete_removes_subtree() {
    let mut doc = populated();
    let removed = doc.delete_node("s").unwrap();

    assert_eq!(tree::collect_ids(std::slice::from_ref(&removed)), vec!["s", "t1", "r", "b1", "b2"]);
    assert!(doc.find_node("b1").is_none());
    assert_eq!(doc.screen().len(), 1);
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut doc = populated();
    doc.select_node(Some("b1")).unwrap();

    doc.delete_node("b1").unwrap();
    assert!(doc.selected_node_id().is_none());
}

#[test]
fn test_delete_ancestor_of_selection_clears_selection() {
    let mut doc = populated();
    doc.select_node(Some("b1")).unwrap();

    doc.delete_node("r").unwrap();
    assert!(doc.selected_node_id().is_none());
}

#[test]
fn test_delete_other_keeps_selection() {
    let mut doc = populated();
    doc.select_node(Some("b1")).unwrap();

    doc.delete_node("t2").unwrap();
    assert_eq!(doc.selected_node_id(), Some("b1"));
}

#[test]
fn test_delete_missing_is_noop() {
    let mut doc = populated();
    let before = doc.pages().to_vec();

    assert_eq!(doc.delete_node("ghost").unwrap_err(), MutationError::NodeNotFound("ghost".to_string()));
    assert_eq!(doc.pages(), &before[..]);
}

#[test]
fn test_duplicate_subtree() {
    let mut doc = populated();
    let existing: HashSet<String> = tree::collect_ids(doc.screen()).into_iter().collect();

    let clone_id = doc.duplicate_node("r").unwrap();

    // Inserted right after the original
    let section = doc.find_node("s").unwrap();
    let ids: Vec<_> = section.children().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "r", clone_id.as_str()]);

    // Fresh ids everywhere in the clone
    let clone = doc.find_node(&clone_id).unwrap();
    let clone_ids = tree::collect_ids(std::slice::from_ref(clone));
    assert_eq!(clone_ids.len(), 3);
    for id in &clone_ids {
        assert!(!existing.contains(id), "id {} reused", id);
    }

    // Same structure apart from ids
    let original = doc.find_node("r").unwrap();
    assert_eq!(strip_ids(original), strip_ids(clone));

    // Clone is selected
    assert_eq!(doc.selected_node_id(), Some(clone_id.as_str()));
}

#[test]
fn test_duplicate_is_deep() {
    let mut doc = populated();
    let clone_id = doc.duplicate_node("r").unwrap();
    let clone_child = doc.find_node(&clone_id).unwrap().children()[0].id.clone();

    doc.update_node_props(&clone_child, json!({ "label": "Changed" }).as_object().unwrap())
        .unwrap();

    assert_eq!(doc.find_node("b1").unwrap().props["label"], "One");
    assert_eq!(doc.find_node(&clone_child).unwrap().props["label"], "Changed");
}

#[test]
fn test_duplicate_root_node() {
    let mut doc = populated();
    let clone_id = doc.duplicate_node("t2").unwrap();

    let ids: Vec<_> = doc.screen().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["s", "t2", clone_id.as_str()]);
}

#[test]
fn test_duplicate_missing_keeps_selection() {
    let mut doc = populated();
    doc.select_node(Some("t1")).unwrap();

    assert!(doc.duplicate_node("ghost").is_err());
    assert_eq!(doc.selected_node_id(), Some("t1"));
}

#[test]
fn test_update_props_shallow_merge() {
    let mut doc = populated();
    let partial = json!({ "label": "Uno", "variant": "primary" });

    doc.update_node_props("b1", partial.as_object().unwrap()).unwrap();

    let b1 = doc.find_node("b1").unwrap();
    assert_eq!(serde_json::Value::Object(b1.props.clone()), json!({ "label": "Uno", "variant": "primary" }));

    // Nested values are replaced, not merged
    doc.update_node_props("b1", json!({ "style": { "color": "red" } }).as_object().unwrap())
        .unwrap();
    doc.update_node_props("b1", json!({ "style": { "margin": 4 } }).as_object().unwrap())
        .unwrap();
    assert_eq!(doc.find_node("b1").unwrap().props["style"], json!({ "margin": 4 }));
}

#[test]
fn test_update_props_keeps_position() {
    let mut doc = populated();
    doc.update_node_props("b2", json!({ "label": "Deux" }).as_object().unwrap())
        .unwrap();

    let row = doc.find_node("r").unwrap();
    assert_eq!(row.children()[1].id, "b2");
    assert_eq!(row.children()[1].props["label"], "Deux");
}

#[test]
fn test_operations_only_see_active_page() {
    let mut doc = populated();
    doc.add_page();

    assert!(doc.find_node("b1").is_none());
    assert_eq!(doc.delete_node("b1").unwrap_err(), MutationError::NodeNotFound("b1".to_string()));
    assert!(doc.pages()[0].children.len() == 2);
}

#[test]
fn test_smart_drop_in_row() {
    let mut doc = populated();
    doc.update_node_props("b1", json!({ "width": "30%" }).as_object().unwrap())
        .unwrap();

    let width = doc.smart_drop(Some("r"), 1).unwrap();

    assert_eq!(width, "70%");
    assert_eq!(doc.find_node("b2").unwrap().props["width"], "70%");
}

#[test]
fn test_smart_drop_on_leaf_parent_changes_nothing() {
    let mut doc = populated();
    let before = doc.pages().to_vec();

    let err = doc.smart_drop(Some("t2"), 0).unwrap_err();

    assert_eq!(err, MutationError::IndexOutOfBounds { index: 0, len: 0 });
    assert_eq!(doc.pages(), &before[..]);
}

#[test]
fn test_smart_drop_unknown_parent_changes_nothing() {
    let mut doc = populated();
    let before = doc.pages().to_vec();
    let version = doc.version;

    let err = doc.smart_drop(Some("ghost"), 0).unwrap_err();

    assert_eq!(err, MutationError::ParentNotFound("ghost".to_string()));
    assert_eq!(doc.pages(), &before[..]);
    assert_eq!(doc.version, version);
}
