use super::save_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::Document;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Document file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());

    if path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), path.display().to_string().bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let doc = Document::new();
    save_document(&doc, &path, config.pretty_export)?;

    println!("  {} Created {} ({})", "✓".green(), path.display(), doc.active_page().title);
    Ok(())
}
