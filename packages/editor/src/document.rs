//! # Document Store
//!
//! Owns the page collection and the transient editor state around it.
//!
//! A `Document` is an ordinary value: construct one per editor, pass it by
//! `&mut` to whatever handles user input. All operations are synchronous
//! and in-memory.
//!
//! ## Invariants
//!
//! - there is always at least one page
//! - `active_page_id` names an existing page, or the first page is used
//! - the selection is `None` or a node reachable from the active page
//! - `version` increases by one on every successful mutation and never on a
//!   failed one

use crate::catalog;
use crate::errors::EditorError;
use crate::id_generator::{IdGenerator, UuidGenerator};
use crate::layout;
use crate::model::{Node, Page, PagePatch, Props};
use crate::mutations::{Mutation, MutationError, MutationResult};
use crate::serializer::{self, DEFAULT_PAGE_TITLE};
use crate::share;
use crate::tree;
use std::fmt;
use tracing::{debug, error, warn};

pub struct Document {
    /// Current version number (increments on each mutation)
    pub version: u64,

    pages: Vec<Page>,
    active_page_id: String,
    selected_node_id: Option<String>,
    is_preview: bool,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("version", &self.version)
            .field("pages", &self.pages)
            .field("active_page_id", &self.active_page_id)
            .field("selected_node_id", &self.selected_node_id)
            .field("is_preview", &self.is_preview)
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Fresh document with a single empty "Page 1" and UUID ids
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    /// Fresh document drawing ids from `ids`
    pub fn with_id_generator(mut ids: Box<dyn IdGenerator>) -> Self {
        let page = Page::new(ids.new_id(), DEFAULT_PAGE_TITLE);
        Self {
            version: 0,
            active_page_id: page.id.clone(),
            pages: vec![page],
            selected_node_id: None,
            is_preview: false,
            ids,
        }
    }

    // ----- queries -----

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn active_page_id(&self) -> &str {
        &self.pages[self.active_index()].id
    }

    pub fn active_page(&self) -> &Page {
        &self.pages[self.active_index()]
    }

    /// Root nodes of the active page
    pub fn screen(&self) -> &[Node] {
        &self.active_page().children
    }

    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    /// Find a node in the active page
    pub fn find_node(&self, node_id: &str) -> Option<&Node> {
        tree::find_node(self.screen(), node_id)
    }

    pub fn selected_node_id(&self) -> Option<&str> {
        self.selected_node_id.as_deref()
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected_node_id.as_deref().and_then(|id| self.find_node(id))
    }

    pub fn is_preview(&self) -> bool {
        self.is_preview
    }

    // ----- mutations -----

    /// Apply a serializable mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, MutationError> {
        let name = mutation.name();
        let result = mutation.apply(self);
        if let Err(e) = &result {
            debug!(mutation = name, error = %e, "mutation not applied");
        }
        result
    }

    /// Append `node` to the active page root, or under `parent_id`
    pub fn add_node(&mut self, node: Node, parent_id: Option<&str>) -> Result<(), MutationError> {
        let node_id = node.id.clone();
        let page = self.active_page_mut();
        tree::insert_under(&mut page.children, parent_id, node)
            .map_err(|_| MutationError::ParentNotFound(parent_id.unwrap_or_default().to_string()))?;

        debug!(node_id = %node_id, parent_id = ?parent_id, "added node");
        self.touch();
        Ok(())
    }

    /// Remove a node (and its subtree) from the active page
    pub fn delete_node(&mut self, node_id: &str) -> Result<Node, MutationError> {
        let page = self.active_page_mut();
        let removed = tree::remove_by_id(&mut page.children, node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        debug!(node_id, "deleted node");
        self.repair_selection();
        self.touch();
        Ok(removed)
    }

    /// Duplicate a node after itself and select the clone
    pub fn duplicate_node(&mut self, node_id: &str) -> Result<String, MutationError> {
        let idx = self.active_index();
        let new_id = tree::duplicate(&mut self.pages[idx].children, node_id, self.ids.as_mut())
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        debug!(node_id, new_id = %new_id, "duplicated node");
        self.selected_node_id = Some(new_id.clone());
        self.touch();
        Ok(new_id)
    }

    /// Shallow-merge `props` into a node's props
    pub fn update_node_props(&mut self, node_id: &str, props: &Props) -> Result<(), MutationError> {
        let page = self.active_page_mut();
        if !tree::update_props(&mut page.children, node_id, props) {
            return Err(MutationError::NodeNotFound(node_id.to_string()));
        }

        debug!(node_id, keys = props.len(), "updated node props");
        self.touch();
        Ok(())
    }

    /// Layout-assist width for the node at `index` among `parent_id`'s children
    pub fn smart_drop(&mut self, parent_id: Option<&str>, index: usize) -> Result<String, MutationError> {
        let page = self.active_page_mut();
        let siblings = tree::children_of_mut(&mut page.children, parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(parent_id.unwrap_or_default().to_string()))?;
        let width = layout::smart_drop(siblings, index)?;

        debug!(parent_id = ?parent_id, index, width = %width, "smart drop");
        self.touch();
        Ok(width)
    }

    /// Append `Page <N+1>` and make it active
    pub fn add_page(&mut self) -> String {
        let page = Page::new(self.ids.new_id(), format!("Page {}", self.pages.len() + 1));
        let page_id = page.id.clone();
        self.pages.push(page);
        self.active_page_id = page_id.clone();
        self.repair_selection();

        debug!(page_id = %page_id, "added page");
        self.touch();
        page_id
    }

    /// Delete a page; the last remaining page can never be deleted
    pub fn delete_page(&mut self, page_id: &str) -> Result<(), MutationError> {
        if self.pages.len() <= 1 {
            return Err(MutationError::LastPage);
        }
        let index = self
            .pages
            .iter()
            .position(|p| p.id == page_id)
            .ok_or_else(|| MutationError::PageNotFound(page_id.to_string()))?;

        let was_active = self.active_page_id() == page_id;
        self.pages.remove(index);
        if was_active {
            self.active_page_id = self.pages[index.saturating_sub(1)].id.clone();
        }
        self.repair_selection();

        debug!(page_id, "deleted page");
        self.touch();
        Ok(())
    }

    /// Merge the given fields into a page
    pub fn update_page(&mut self, page_id: &str, patch: PagePatch) -> Result<(), MutationError> {
        let page = self
            .pages
            .iter_mut()
            .find(|p| p.id == page_id)
            .ok_or_else(|| MutationError::PageNotFound(page_id.to_string()))?;
        patch.apply_to(page);

        self.repair_selection();
        debug!(page_id, "updated page");
        self.touch();
        Ok(())
    }

    // ----- editor state -----

    pub fn set_active_page(&mut self, page_id: &str) -> Result<(), MutationError> {
        if self.page(page_id).is_none() {
            return Err(MutationError::PageNotFound(page_id.to_string()));
        }
        self.active_page_id = page_id.to_string();
        self.repair_selection();
        Ok(())
    }

    /// Select a node of the active page, or clear the selection.
    ///
    /// Ignored while previewing.
    pub fn select_node(&mut self, node_id: Option<&str>) -> Result<(), MutationError> {
        if self.is_preview {
            return Ok(());
        }
        match node_id {
            Some(id) if self.find_node(id).is_none() => Err(MutationError::NodeNotFound(id.to_string())),
            _ => {
                self.selected_node_id = node_id.map(str::to_string);
                Ok(())
            }
        }
    }

    /// Flip preview mode. Entering preview drops the selection and returns
    /// to the first page.
    pub fn toggle_preview(&mut self) -> bool {
        self.is_preview = !self.is_preview;
        if self.is_preview {
            self.selected_node_id = None;
            self.active_page_id = self.pages[0].id.clone();
        }
        self.is_preview
    }

    /// Reset to a single empty page
    pub fn clear(&mut self) {
        let page = Page::new(self.ids.new_id(), DEFAULT_PAGE_TITLE);
        self.replace_pages(vec![page]);
    }

    /// Build a node of `node_type` with a fresh id and catalog defaults
    pub fn create_node(&mut self, node_type: &str) -> Node {
        Node::new(self.ids.new_id(), node_type).with_props(catalog::default_props(node_type))
    }

    // ----- serialization -----

    /// Pretty-printed JSON of all pages
    pub fn export_json(&self) -> Result<String, EditorError> {
        serializer::export_json(&self.pages)
    }

    /// Replace the document from import text.
    ///
    /// On failure the document is left exactly as it was.
    pub fn import_json(&mut self, text: &str) -> Result<(), EditorError> {
        let pages = serializer::parse_document(text, self.ids.as_mut())?;
        self.replace_pages(pages);
        Ok(())
    }

    /// Share URL embedding the compressed document
    pub fn share_url(&self, origin: &str) -> Result<String, EditorError> {
        share::share_url(origin, &self.pages)
    }

    /// Replace the document from a share payload.
    ///
    /// Any failure is logged and leaves a single empty page; the error is
    /// returned for inspection only.
    pub fn load_from_compressed(&mut self, payload: &str) -> Result<(), EditorError> {
        match share::pages_from_payload(payload, self.ids.as_mut()) {
            Ok(pages) => {
                self.replace_pages(pages);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to load shared design");
                self.clear();
                Err(e)
            }
        }
    }

    // ----- internals -----

    fn active_index(&self) -> usize {
        self.pages
            .iter()
            .position(|p| p.id == self.active_page_id)
            .unwrap_or(0)
    }

    fn active_page_mut(&mut self) -> &mut Page {
        let idx = self.active_index();
        &mut self.pages[idx]
    }

    fn replace_pages(&mut self, pages: Vec<Page>) {
        let repeated = tree::repeated_ids(pages.iter().map(|p| p.children.as_slice()));
        if !repeated.is_empty() {
            warn!(ids = ?repeated, "document contains repeated node ids");
        }

        self.pages = pages;
        self.active_page_id = self.pages[0].id.clone();
        self.repair_selection();
        self.touch();
    }

    fn repair_selection(&mut self) {
        let reachable = match self.selected_node_id.as_deref() {
            Some(id) => tree::contains_node(self.screen(), id),
            None => true,
        };
        if !reachable {
            self.selected_node_id = None;
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}
