use super::{load_document, parse_props, save_document, select_page};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{catalog, tree};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Component type (see `pagecraft catalog`)
    pub node_type: String,

    /// Parent node id (appends to the page root when omitted)
    #[arg(long)]
    pub parent: Option<String>,

    /// Page id (defaults to the first page)
    #[arg(long)]
    pub page: Option<String>,

    /// Extra props as a JSON object, merged over the catalog defaults
    #[arg(long)]
    pub props: Option<String>,

    /// Give the node a width that fills the rest of its row
    #[arg(long)]
    pub smart: bool,

    /// Document file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());
    let mut doc = load_document(&path)?;
    select_page(&mut doc, args.page.as_deref())?;

    if catalog::find(&args.node_type).is_none() {
        tracing::warn!(node_type = %args.node_type, "type is not in the component catalog");
    }

    let mut node = doc.create_node(&args.node_type);
    if let Some(props) = &args.props {
        node.props.extend(parse_props(props)?);
    }
    let node_id = node.id.clone();
    doc.add_node(node, args.parent.as_deref())?;

    let width = if args.smart {
        let siblings = match args.parent.as_deref() {
            Some(parent) => tree::find_node(doc.screen(), parent).map(|p| p.children()).unwrap_or(&[]),
            None => doc.screen(),
        };
        let index = siblings
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| anyhow!("Inserted node {} not found", node_id))?;
        Some(doc.smart_drop(args.parent.as_deref(), index)?)
    } else {
        None
    };

    save_document(&doc, &path, config.pretty_export)?;

    print!("  {} Added {} {}", "✓".green(), args.node_type.bright_white(), node_id.dimmed());
    if let Some(width) = width {
        print!(" width={}", width.cyan());
    }
    println!();
    Ok(())
}
