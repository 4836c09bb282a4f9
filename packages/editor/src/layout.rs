//! # Layout Assist
//!
//! Picks a percentage `width` for a node dropped into a row-flow container.
//! Siblings before the drop index are laid out as wrapping rows; the new
//! node takes whatever is left of the current row, or a full row when less
//! than [`MIN_FREE_SPACE`] percent remains.
//!
//! Only the `width` prop is modelled. Row height, pixel widths and other
//! layout modes are ignored.

use crate::model::Node;
use crate::mutations::MutationError;
use serde_json::Value;

/// Width assumed for nodes with no usable `width` prop
pub const FULL_WIDTH: f64 = 100.0;

/// Slack for accumulated rounding when deciding whether a row overflowed
pub const ROW_TOLERANCE: f64 = 100.1;

/// Below this much free space the dropped node starts a new row
pub const MIN_FREE_SPACE: f64 = 5.0;

/// Interpret a `width` prop as a percentage.
///
/// - absent → 100
/// - number ≤ 1 → fraction, scaled by 100
/// - number > 1 → taken as-is
/// - `"NN%"` → NN (unparsable → 100)
/// - anything else → 100
pub fn parse_width(width: Option<&Value>) -> f64 {
    match width {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(w) if w <= 1.0 => w * 100.0,
            Some(w) => w,
            None => FULL_WIDTH,
        },
        Some(Value::String(s)) => s
            .strip_suffix('%')
            .and_then(|num| num.trim().parse::<f64>().ok())
            .filter(|w| w.is_finite())
            .unwrap_or(FULL_WIDTH),
        _ => FULL_WIDTH,
    }
}

/// Width used by the row that `nodes[..index]` leaves open
pub fn current_row_width(nodes: &[Node], index: usize) -> f64 {
    let mut row = 0.0;
    for node in nodes.iter().take(index) {
        let w = parse_width(node.props.get("width"));
        if row + w > ROW_TOLERANCE {
            row = w;
        } else {
            row += w;
        }
    }
    row
}

/// Width string a node dropped at `index` should get
pub fn width_for_drop(nodes: &[Node], index: usize) -> String {
    let free_space = FULL_WIDTH - current_row_width(nodes, index);
    if free_space >= MIN_FREE_SPACE {
        format!("{}%", free_space.floor())
    } else {
        "100%".to_string()
    }
}

/// Assign the computed width to `nodes[index]` and return it
pub fn smart_drop(nodes: &mut [Node], index: usize) -> Result<String, MutationError> {
    if index >= nodes.len() {
        return Err(MutationError::IndexOutOfBounds {
            index,
            len: nodes.len(),
        });
    }

    let width = width_for_drop(nodes, index);
    let node = &mut nodes[index];
    let mut props = node.props.clone();
    props.insert("width".to_string(), Value::String(width.clone()));
    node.props = props;

    Ok(width)
}
