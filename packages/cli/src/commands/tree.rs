use super::load_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::Node;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Document file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn tree(args: TreeArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());
    let doc = load_document(&path)?;

    for page in doc.pages() {
        println!("{} {}", page.title.bright_blue().bold(), page.id.dimmed());
        if let Some(description) = &page.description {
            println!("  {}", description.italic());
        }
        print!("{}", outline(&page.children));
    }
    Ok(())
}

/// Indented outline of a node list, one node per line
pub fn outline(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes, 1);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node], depth: usize) {
    for node in nodes {
        let _ = write!(out, "{}{} {}", "  ".repeat(depth), node.node_type, node.id);
        if let Some(width) = node.props.get("width").and_then(|w| w.as_str()) {
            let _ = write!(out, " [{}]", width);
        }
        out.push('\n');
        write_nodes(out, node.children(), depth + 1);
    }
}
