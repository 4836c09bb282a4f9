//! # Component Catalog
//!
//! Static palette of node types, grouped the way the builder's sidebar shows
//! them. The store only reads `type` and `defaultProps` from here when a new
//! node is created; everything else is for palettes.

use crate::model::Props;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub node_type: &'static str,
    pub label: &'static str,
    pub group: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_props: Option<Props>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentGroup {
    pub title: &'static str,
    pub items: Vec<ComponentDefinition>,
}

fn item(node_type: &'static str, label: &'static str, group: &'static str, defaults: Option<Value>) -> ComponentDefinition {
    ComponentDefinition {
        node_type,
        label,
        group,
        icon: None,
        default_props: defaults.and_then(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        }),
    }
}

static GROUPS: Lazy<Vec<ComponentGroup>> = Lazy::new(|| {
    let option_list = || json!([{ "label": "Option 1", "value": "1" }]);

    vec![
        ComponentGroup {
            title: "Layout / Structure",
            items: vec![
                item("section", "Section", "layout", Some(json!({ "class": "p-4 border border-dashed border-gray-300 min-h-[100px]" }))),
                item("row", "Row", "layout", Some(json!({ "class": "flex flex-row gap-2 p-2 border border-dashed border-gray-200 min-h-[50px]" }))),
                item("column", "Column", "layout", Some(json!({ "class": "flex flex-col gap-2 p-2 border border-dashed border-gray-200 min-h-[50px] flex-1" }))),
                item("card", "Card", "layout", Some(json!({ "class": "p-4 shadow rounded bg-white" }))),
                item("tabs", "Tabs", "layout", None),
                item("accordion", "Accordion", "layout", None),
                item("divider", "Divider", "layout", None),
            ],
        },
        ComponentGroup {
            title: "Text & Display",
            items: vec![
                item("heading", "Heading", "display", Some(json!({ "text": "Heading", "level": "h1" }))),
                item("text", "Text", "display", Some(json!({ "text": "Text block" }))),
                item("label", "Label", "display", Some(json!({ "text": "Label" }))),
                item("icon", "Icon", "display", None),
                item("image", "Image", "display", None),
                item("badge", "Badge", "display", Some(json!({ "text": "Badge" }))),
                item("chip", "Chip", "display", Some(json!({ "text": "Chip" }))),
            ],
        },
        ComponentGroup {
            title: "Form Inputs",
            items: vec![
                item("textInput", "Text Input", "form", Some(json!({ "placeholder": "Enter text..." }))),
                item("textarea", "Textarea", "form", Some(json!({ "placeholder": "Enter long text..." }))),
                item("numberInput", "Number Input", "form", None),
                item("passwordInput", "Password", "form", None),
                item("select", "Select", "form", Some(json!({ "options": option_list() }))),
                item("multiSelect", "Multi-select", "form", None),
                item("radioGroup", "Radio Group", "form", Some(json!({ "options": option_list() }))),
                item("checkbox", "Checkbox", "form", Some(json!({ "label": "Check me" }))),
                item("checkboxGroup", "Checkbox Group", "form", None),
                item("switch", "Switch", "form", Some(json!({ "label": "Toggle" }))),
                item("datePicker", "Date Picker", "form", None),
                item("timePicker", "Time Picker", "form", None),
                item("dateTimePicker", "DateTime Picker", "form", None),
                item("slider", "Slider", "form", None),
                item("fileUpload", "File Upload", "form", None),
                item("toggleButton", "Toggle Button", "form", None),
            ],
        },
        ComponentGroup {
            title: "Actions",
            items: vec![
                item("button", "Button", "action", Some(json!({ "label": "Button", "variant": "primary" }))),
                item("iconButton", "Icon Button", "action", None),
                item("link", "Link", "action", Some(json!({ "label": "Link", "href": "#" }))),
            ],
        },
        ComponentGroup {
            title: "Data & Lists",
            items: vec![
                item("table", "Table", "data", None),
                item("list", "List", "data", None),
                item("kpi", "KPI", "data", None),
                item("progressBar", "Progress Bar", "data", None),
                item("stepper", "Stepper", "data", None),
            ],
        },
    ]
});

/// All palette groups, in display order
pub fn groups() -> &'static [ComponentGroup] {
    &GROUPS
}

/// Look up a definition by node type
pub fn find(node_type: &str) -> Option<&'static ComponentDefinition> {
    GROUPS
        .iter()
        .flat_map(|group| group.items.iter())
        .find(|def| def.node_type == node_type)
}

/// Default props for a node type (empty for unknown types)
pub fn default_props(node_type: &str) -> Props {
    find(node_type)
        .and_then(|def| def.default_props.clone())
        .unwrap_or_default()
}
