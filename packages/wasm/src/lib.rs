//! Browser bindings for the page store.
//!
//! Structured data crosses the boundary as JSON strings; failures become
//! `JsValue` strings so the front end can show them as-is.

use pagecraft_editor::{catalog, Document, Mutation, Node, PagePatch, Props};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_props(json: &str) -> Result<Props, JsValue> {
    match serde_json::from_str(json).map_err(js_error)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(JsValue::from_str("props must be a JSON object")),
    }
}

/// Page store handle owned by the front end
#[wasm_bindgen]
pub struct Editor {
    doc: Document,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor { doc: Document::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.doc.version as f64
    }

    /// All pages as JSON
    #[wasm_bindgen(js_name = pagesJson)]
    pub fn pages_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.doc.pages()).map_err(js_error)
    }

    /// Children of the active page as JSON
    #[wasm_bindgen(js_name = screenJson)]
    pub fn screen_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.doc.screen()).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = activePageId)]
    pub fn active_page_id(&self) -> String {
        self.doc.active_page_id().to_string()
    }

    #[wasm_bindgen(js_name = setActivePage)]
    pub fn set_active_page(&mut self, page_id: &str) -> Result<(), JsValue> {
        self.doc.set_active_page(page_id).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = selectedNodeId)]
    pub fn selected_node_id(&self) -> Option<String> {
        self.doc.selected_node_id().map(str::to_string)
    }

    #[wasm_bindgen(js_name = selectNode)]
    pub fn select_node(&mut self, node_id: Option<String>) -> Result<(), JsValue> {
        self.doc.select_node(node_id.as_deref()).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = isPreview)]
    pub fn is_preview(&self) -> bool {
        self.doc.is_preview()
    }

    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&mut self) -> bool {
        self.doc.toggle_preview()
    }

    /// Build a node of `node_type` with catalog defaults; returns its JSON
    #[wasm_bindgen(js_name = createNode)]
    pub fn create_node(&mut self, node_type: &str) -> Result<String, JsValue> {
        let node = self.doc.create_node(node_type);
        serde_json::to_string(&node).map_err(js_error)
    }

    /// Insert a node given as JSON; returns its id
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, node_json: &str, parent_id: Option<String>) -> Result<String, JsValue> {
        let node: Node = serde_json::from_str(node_json).map_err(js_error)?;
        let id = node.id.clone();
        self.doc.add_node(node, parent_id.as_deref()).map_err(js_error)?;
        Ok(id)
    }

    #[wasm_bindgen(js_name = deleteNode)]
    pub fn delete_node(&mut self, node_id: &str) -> Result<(), JsValue> {
        self.doc.delete_node(node_id).map(|_| ()).map_err(js_error)
    }

    /// Returns the id of the clone
    #[wasm_bindgen(js_name = duplicateNode)]
    pub fn duplicate_node(&mut self, node_id: &str) -> Result<String, JsValue> {
        self.doc.duplicate_node(node_id).map_err(js_error)
    }

    #[wasm_bindgen(js_name = updateNodeProps)]
    pub fn update_node_props(&mut self, node_id: &str, props_json: &str) -> Result<(), JsValue> {
        let props = parse_props(props_json)?;
        self.doc.update_node_props(node_id, &props).map_err(js_error)
    }

    /// Returns the width assigned to the dropped node
    #[wasm_bindgen(js_name = smartDrop)]
    pub fn smart_drop(&mut self, parent_id: Option<String>, index: usize) -> Result<String, JsValue> {
        self.doc.smart_drop(parent_id.as_deref(), index).map_err(js_error)
    }

    #[wasm_bindgen(js_name = addPage)]
    pub fn add_page(&mut self) -> String {
        self.doc.add_page()
    }

    #[wasm_bindgen(js_name = deletePage)]
    pub fn delete_page(&mut self, page_id: &str) -> Result<(), JsValue> {
        self.doc.delete_page(page_id).map_err(js_error)
    }

    /// `patch_json` may carry `title`, `description`, `children` and `props`
    #[wasm_bindgen(js_name = updatePage)]
    pub fn update_page(&mut self, page_id: &str, patch_json: &str) -> Result<(), JsValue> {
        let patch: PagePatch = serde_json::from_str(patch_json).map_err(js_error)?;
        self.doc.update_page(page_id, patch).map_err(js_error)
    }

    /// Apply a serialized mutation; returns the result as JSON
    #[wasm_bindgen(js_name = applyMutation)]
    pub fn apply_mutation(&mut self, mutation_json: &str) -> Result<String, JsValue> {
        let mutation: Mutation = serde_json::from_str(mutation_json).map_err(js_error)?;
        let result = self.doc.apply(mutation).map_err(js_error)?;
        serde_json::to_string(&result).map_err(js_error)
    }

    pub fn clear(&mut self) {
        self.doc.clear();
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.doc.export_json().map_err(js_error)
    }

    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&mut self, text: &str) -> Result<(), JsValue> {
        self.doc.import_json(text).map_err(js_error)
    }

    #[wasm_bindgen(js_name = shareUrl)]
    pub fn share_url(&self, origin: &str) -> Result<String, JsValue> {
        self.doc.share_url(origin).map_err(js_error)
    }

    /// Load a share payload. Returns `false` when the payload was unusable
    /// and the store fell back to an empty page.
    #[wasm_bindgen(js_name = loadFromCompressed)]
    pub fn load_from_compressed(&mut self, payload: &str) -> bool {
        self.doc.load_from_compressed(payload).is_ok()
    }
}

/// Component palette as JSON
#[wasm_bindgen(js_name = componentCatalog)]
pub fn component_catalog() -> Result<String, JsValue> {
    serde_json::to_string(catalog::groups()).map_err(js_error)
}
