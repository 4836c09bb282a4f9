//! # Pagecraft Editor
//!
//! Document store for the Pagecraft page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ front end: palette, canvas, property panel  │
//! └─────────────────────────────────────────────┘
//!                     ↓ (typed calls or Mutation JSON)
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document store                      │
//! │  - Pages of node trees                      │
//! │  - Id-addressed tree mutations              │
//! │  - Selection / preview state                │
//! │  - JSON export/import, share links          │
//! │  - Layout assist for row drops              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ JSON file  /  <origin>/#/?data=<payload>    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::Document;
//!
//! let mut doc = Document::new();
//!
//! let row = doc.create_node("row");
//! let row_id = row.id.clone();
//! doc.add_node(row, None)?;
//!
//! let button = doc.create_node("button");
//! doc.add_node(button, Some(&row_id))?;
//!
//! let json = doc.export_json()?;
//! let url = doc.share_url("https://builder.example")?;
//!
//! let mut copy = Document::new();
//! copy.import_json(&json)?;
//! assert_eq!(copy.pages(), doc.pages());
//! # assert!(url.contains("#/?data="));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
mod document;
mod errors;
mod id_generator;
pub mod layout;
mod model;
mod mutations;
pub mod serializer;
pub mod share;
pub mod tree;

pub use document::Document;
pub use errors::EditorError;
pub use id_generator::{IdGenerator, SequentialIds, UuidGenerator};
pub use model::{EventAction, Node, Page, PagePatch, Props};
pub use mutations::{Mutation, MutationError, MutationResult};
