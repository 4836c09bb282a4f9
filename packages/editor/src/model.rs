//! # Document Model
//!
//! Pages own an ordered list of root nodes; nodes own their children.
//! Field names match the persisted JSON format exactly, so a page array
//! produced by `serde_json` is the export format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Open, weakly typed property bag (shapes come from the component catalog)
pub type Props = Map<String, Value>;

/// A single UI element instance in the design tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,

    #[serde(default)]
    pub props: Props,

    /// Absent for leaves; created on first insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<BTreeMap<String, EventAction>>,
}

/// Action fired by a node event (e.g. `click` → `navigate`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAction {
    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Node {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            props: Props::new(),
            children: None,
            bindings: None,
            events: None,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    /// Children slice (empty for leaves)
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Mutable child list, created if absent
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        self.children.get_or_insert_with(Vec::new)
    }
}

/// Top-level container of a node tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub children: Vec<Node>,

    #[serde(default)]
    pub props: Props,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            children: Vec::new(),
            props: Props::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

/// Partial page update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
}

impl PagePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn apply_to(self, page: &mut Page) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(description) = self.description {
            page.description = Some(description);
        }
        if let Some(children) = self.children {
            page.children = children;
        }
        if let Some(props) = self.props {
            page.props = props;
        }
    }
}
