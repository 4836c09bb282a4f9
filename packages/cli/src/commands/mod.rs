pub mod add;
pub mod catalog;
pub mod edit;
pub mod import;
pub mod new;
pub mod open;
pub mod page;
pub mod share;
pub mod tree;

pub use add::{add, AddArgs};
pub use catalog::{catalog, CatalogArgs};
pub use edit::{duplicate, remove, set, DuplicateArgs, RemoveArgs, SetArgs};
pub use import::{import, ImportArgs};
pub use new::{new, NewArgs};
pub use open::{open, OpenArgs};
pub use page::{page, PageArgs};
pub use share::{share, ShareArgs};
pub use tree::{tree, TreeArgs};

use anyhow::{anyhow, Context, Result};
use pagecraft_editor::{serializer, Document, Props};
use std::fs;
use std::path::Path;

/// Read a document file (any shape the importer accepts)
pub fn load_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let mut doc = Document::new();
    doc.import_json(&text)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    Ok(doc)
}

/// Write the document's pages to `path`
pub fn save_document(doc: &Document, path: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        doc.export_json()?
    } else {
        serializer::to_compact_json(doc.pages())?
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))?;
    tracing::debug!(path = %path.display(), pages = doc.pages().len(), "saved document");
    Ok(())
}

/// Switch to `page_id` when one is given
pub fn select_page(doc: &mut Document, page_id: Option<&str>) -> Result<()> {
    if let Some(page_id) = page_id {
        doc.set_active_page(page_id)?;
    }
    Ok(())
}

/// Parse a JSON object given on the command line
pub fn parse_props(json: &str) -> Result<Props> {
    match serde_json::from_str(json)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(anyhow!("Props must be a JSON object, got {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_editor::Node;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("design.json");

        let mut doc = Document::new();
        doc.add_node(Node::new("n1", "text"), None).unwrap();
        save_document(&doc, &path, true).unwrap();

        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.pages(), doc.pages());
    }

    #[test]
    fn test_compact_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.json");

        save_document(&Document::new(), &path, false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to import"));
    }

    #[test]
    fn test_parse_props() {
        let props = parse_props(r#"{ "label": "Go", "width": "50%" }"#).unwrap();
        assert_eq!(props["label"], "Go");

        assert!(parse_props("[1, 2]").is_err());
        assert!(parse_props("nope").is_err());
    }
}
