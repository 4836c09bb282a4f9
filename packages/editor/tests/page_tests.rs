//! Page lifecycle tests

use pagecraft_editor::{Document, MutationError, Node, PagePatch, SequentialIds};
use serde_json::json;

fn seeded() -> Document {
    Document::with_id_generator(Box::new(SequentialIds::new("p")))
}

#[test]
fn test_add_page_titles_and_activation() {
    let mut doc = seeded();

    let second = doc.add_page();
    let third = doc.add_page();

    let titles: Vec<_> = doc.pages().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Page 1", "Page 2", "Page 3"]);
    assert_eq!(doc.active_page_id(), third);
    assert_ne!(second, third);
    assert!(doc.active_page().children.is_empty());
    assert!(doc.active_page().props.is_empty());
}

#[test]
fn test_title_counts_pages_not_history() {
    let mut doc = seeded();
    let second = doc.add_page();
    doc.delete_page(&second).unwrap();

    doc.add_page();
    assert_eq!(doc.active_page().title, "Page 2");
}

#[test]
fn test_last_page_cannot_be_deleted() {
    let mut doc = seeded();
    doc.add_node(Node::new("n1", "text"), None).unwrap();
    let only = doc.active_page_id().to_string();
    let before = doc.pages().to_vec();
    let version = doc.version;

    assert_eq!(doc.delete_page(&only).unwrap_err(), MutationError::LastPage);
    assert_eq!(doc.delete_page("anything").unwrap_err(), MutationError::LastPage);

    assert_eq!(doc.pages(), &before[..]);
    assert_eq!(doc.active_page_id(), only);
    assert_eq!(doc.version, version);
}

#[test]
fn test_delete_active_page_moves_to_previous() {
    let mut doc = seeded();
    let first = doc.active_page_id().to_string();
    let second = doc.add_page();
    let third = doc.add_page();

    doc.set_active_page(&second).unwrap();
    doc.delete_page(&second).unwrap();
    assert_eq!(doc.active_page_id(), first);

    // Deleting the first page while active falls to index 0
    doc.set_active_page(&first).unwrap();
    doc.delete_page(&first).unwrap();
    assert_eq!(doc.active_page_id(), third);
    assert_eq!(doc.pages().len(), 1);
}

#[test]
fn test_delete_inactive_page_keeps_active() {
    let mut doc = seeded();
    let first = doc.active_page_id().to_string();
    let second = doc.add_page();

    doc.delete_page(&first).unwrap();

    assert_eq!(doc.active_page_id(), second);
    assert_eq!(doc.pages().len(), 1);
}

#[test]
fn test_delete_unknown_page() {
    let mut doc = seeded();
    doc.add_page();

    assert_eq!(
        doc.delete_page("ghost").unwrap_err(),
        MutationError::PageNotFound("ghost".to_string())
    );
    assert_eq!(doc.pages().len(), 2);
}

#[test]
fn test_delete_active_page_clears_its_selection() {
    let mut doc = seeded();
    doc.add_page();
    let second = doc.active_page_id().to_string();
    doc.add_node(Node::new("n1", "text"), None).unwrap();
    doc.select_node(Some("n1")).unwrap();

    doc.delete_page(&second).unwrap();
    assert!(doc.selected_node_id().is_none());
}

#[test]
fn test_update_page_partial_fields() {
    let mut doc = seeded();
    let id = doc.active_page_id().to_string();

    doc.update_page(
        &id,
        PagePatch {
            description: Some("Landing page".to_string()),
            props: Some(json!({ "background": "#fff" }).as_object().unwrap().clone()),
            ..PagePatch::default()
        },
    )
    .unwrap();
    doc.update_page(&id, PagePatch::title("Home")).unwrap();

    let page = doc.active_page();
    assert_eq!(page.title, "Home");
    assert_eq!(page.description.as_deref(), Some("Landing page"));
    assert_eq!(page.props["background"], "#fff");
}

#[test]
fn test_update_page_children_drops_stale_selection() {
    let mut doc = seeded();
    let id = doc.active_page_id().to_string();
    doc.add_node(Node::new("n1", "text"), None).unwrap();
    doc.select_node(Some("n1")).unwrap();

    doc.update_page(
        &id,
        PagePatch {
            children: Some(vec![Node::new("n2", "text")]),
            ..PagePatch::default()
        },
    )
    .unwrap();

    assert!(doc.selected_node_id().is_none());
    assert!(doc.find_node("n2").is_some());
}

#[test]
fn test_update_unknown_page() {
    let mut doc = seeded();
    assert_eq!(
        doc.update_page("ghost", PagePatch::title("x")).unwrap_err(),
        MutationError::PageNotFound("ghost".to_string())
    );
}
