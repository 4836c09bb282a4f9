use super::{load_document, parse_props, save_document, select_page};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Node id
    pub id: String,

    /// Page id (defaults to the first page)
    #[arg(long)]
    pub page: Option<String>,

    /// Document file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DuplicateArgs {
    /// Node id
    pub id: String,

    /// Page id (defaults to the first page)
    #[arg(long)]
    pub page: Option<String>,

    /// Document file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Node id
    pub id: String,

    /// Props to merge, as a JSON object
    pub props: String,

    /// Page id (defaults to the first page)
    #[arg(long)]
    pub page: Option<String>,

    /// Document file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());
    let mut doc = load_document(&path)?;
    select_page(&mut doc, args.page.as_deref())?;

    let removed = doc.delete_node(&args.id)?;
    save_document(&doc, &path, config.pretty_export)?;

    println!("  {} Removed {} {}", "✓".green(), removed.node_type.bright_white(), removed.id.dimmed());
    Ok(())
}

pub fn duplicate(args: DuplicateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());
    let mut doc = load_document(&path)?;
    select_page(&mut doc, args.page.as_deref())?;

    let new_id = doc.duplicate_node(&args.id)?;
    save_document(&doc, &path, config.pretty_export)?;

    println!("  {} Duplicated {} → {}", "✓".green(), args.id.dimmed(), new_id.bright_white());
    Ok(())
}

pub fn set(args: SetArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());
    let mut doc = load_document(&path)?;
    select_page(&mut doc, args.page.as_deref())?;

    let props = parse_props(&args.props)?;
    doc.update_node_props(&args.id, &props)?;
    save_document(&doc, &path, config.pretty_export)?;

    println!("  {} Updated {} ({} props)", "✓".green(), args.id.bright_white(), props.len());
    Ok(())
}
