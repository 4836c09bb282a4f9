//! # Document Mutations
//!
//! Every edit a front end can make, as a serializable value. Front ends that
//! talk JSON (the wasm bindings) send these; Rust callers usually use the
//! typed methods on [`Document`](crate::Document) directly, which is what
//! [`Mutation::apply`] dispatches to.
//!
//! ## Failure semantics
//!
//! An unresolved id never changes state. The failure is reported as a
//! [`MutationError`] so callers can observe it; callers that want the
//! permissive behavior of a page builder simply ignore the result.

use crate::document::Document;
use crate::model::{Node, PagePatch, Props};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a node to the active page root, or under a parent node
    AddNode {
        node: Node,
        #[serde(default)]
        parent_id: Option<String>,
    },

    /// Remove a node and its subtree
    RemoveNode {
        node_id: String,
    },

    /// Clone a subtree with fresh ids, right after the original
    DuplicateNode {
        node_id: String,
    },

    /// Shallow-merge props into a node
    UpdateNodeProps {
        node_id: String,
        props: Props,
    },

    AddPage,

    DeletePage {
        page_id: String,
    },

    UpdatePage {
        page_id: String,
        patch: PagePatch,
    },

    /// Assign a layout-assist width to the node at `index` among the
    /// children of `parent_id` (active page root when absent)
    SmartDrop {
        #[serde(default)]
        parent_id: Option<String>,
        index: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Cannot delete the last remaining page")]
    LastPage,

    #[error("Index {index} out of bounds for {len} siblings")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result of applying a mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// Id of a node or page created by the mutation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_id: Option<String>,

    /// Node taken out of the tree by a removal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<Node>,

    /// Width assigned by a smart drop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

impl Mutation {
    /// Apply this mutation to the document
    pub fn apply(self, doc: &mut Document) -> Result<MutationResult, MutationError> {
        let mut result = MutationResult::default();

        match self {
            Mutation::AddNode { node, parent_id } => {
                doc.add_node(node, parent_id.as_deref())?;
            }

            Mutation::RemoveNode { node_id } => {
                result.removed = Some(doc.delete_node(&node_id)?);
            }

            Mutation::DuplicateNode { node_id } => {
                result.created_id = Some(doc.duplicate_node(&node_id)?);
            }

            Mutation::UpdateNodeProps { node_id, props } => {
                doc.update_node_props(&node_id, &props)?;
            }

            Mutation::AddPage => {
                result.created_id = Some(doc.add_page());
            }

            Mutation::DeletePage { page_id } => {
                doc.delete_page(&page_id)?;
            }

            Mutation::UpdatePage { page_id, patch } => {
                doc.update_page(&page_id, patch)?;
            }

            Mutation::SmartDrop { parent_id, index } => {
                result.width = Some(doc.smart_drop(parent_id.as_deref(), index)?);
            }
        }

        result.version = doc.version;
        Ok(result)
    }

    /// Debug name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddNode { .. } => "AddNode",
            Mutation::RemoveNode { .. } => "RemoveNode",
            Mutation::DuplicateNode { .. } => "DuplicateNode",
            Mutation::UpdateNodeProps { .. } => "UpdateNodeProps",
            Mutation::AddPage => "AddPage",
            Mutation::DeletePage { .. } => "DeletePage",
            Mutation::UpdatePage { .. } => "UpdatePage",
            Mutation::SmartDrop { .. } => "SmartDrop",
        }
    }
}
