//! # Document Serialization
//!
//! The persisted format is a JSON array of pages. Import is lenient about
//! what it accepts, deciding the shape from the top-level value:
//!
//! 1. a non-empty array whose first element has a `children` key is a full
//!    page collection
//! 2. any other array is a bare list of root nodes, wrapped in `"Page 1"`
//! 3. anything else yields a single empty `"Page 1"`

use crate::errors::EditorError;
use crate::id_generator::IdGenerator;
use crate::model::{Node, Page};
use serde_json::Value;

/// Title given to synthesized pages
pub const DEFAULT_PAGE_TITLE: &str = "Page 1";

/// File name used when exporting to disk
pub const DEFAULT_EXPORT_FILE: &str = "screen-design.json";

/// Shape detected on import
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentShape {
    Pages(Vec<Page>),
    Nodes(Vec<Node>),
    Empty,
}

impl DocumentShape {
    /// Classify a parsed JSON value and deserialize it
    pub fn recognize(value: Value) -> Result<Self, EditorError> {
        match value {
            Value::Array(items) if is_page_collection(&items) => {
                let pages: Vec<Page> = serde_json::from_value(Value::Array(items))
                    .map_err(|e| EditorError::InvalidDocument(format!("pages: {}", e)))?;
                Ok(DocumentShape::Pages(pages))
            }
            Value::Array(items) => {
                let nodes: Vec<Node> = serde_json::from_value(Value::Array(items))
                    .map_err(|e| EditorError::InvalidDocument(format!("nodes: {}", e)))?;
                Ok(DocumentShape::Nodes(nodes))
            }
            _ => Ok(DocumentShape::Empty),
        }
    }

    /// Turn the shape into a non-empty page list
    pub fn into_pages(self, ids: &mut dyn IdGenerator) -> Vec<Page> {
        match self {
            DocumentShape::Pages(pages) => pages,
            DocumentShape::Nodes(nodes) => {
                vec![Page::new(ids.new_id(), DEFAULT_PAGE_TITLE).with_children(nodes)]
            }
            DocumentShape::Empty => vec![Page::new(ids.new_id(), DEFAULT_PAGE_TITLE)],
        }
    }
}

fn is_page_collection(items: &[Value]) -> bool {
    items
        .first()
        .and_then(Value::as_object)
        .map_or(false, |first| first.contains_key("children"))
}

/// Pretty-printed JSON of the page collection (the export format)
pub fn export_json(pages: &[Page]) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(pages)?)
}

/// Compact JSON of the page collection (used for share payloads)
pub fn to_compact_json(pages: &[Page]) -> Result<String, EditorError> {
    Ok(serde_json::to_string(pages)?)
}

/// Parse import text into pages, applying the shape rules
pub fn parse_document(text: &str, ids: &mut dyn IdGenerator) -> Result<Vec<Page>, EditorError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(DocumentShape::recognize(value)?.into_pages(ids))
}
