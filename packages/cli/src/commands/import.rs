use super::{load_document, save_document};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file to import: a page array, a bare node array, or anything else
    pub source: PathBuf,

    /// Where to write the normalized document (defaults to the configured file)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let source = config.document_path(cwd, Some(&args.source));
    let out = config.document_path(cwd, args.out.as_deref());

    // Malformed input fails here, before anything is written
    let doc = load_document(&source)?;
    save_document(&doc, &out, config.pretty_export)?;

    let nodes: usize = doc.pages().iter().map(|p| pagecraft_editor::tree::collect_ids(&p.children).len()).sum();
    println!(
        "  {} Imported {} → {} ({} pages, {} nodes)",
        "✓".green(),
        source.display(),
        out.display(),
        doc.pages().len(),
        nodes
    );
    Ok(())
}
