use super::{load_document, save_document};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use pagecraft_editor::PagePatch;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PageArgs {
    #[command(subcommand)]
    pub command: PageCommand,

    /// Document file (defaults to the configured file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum PageCommand {
    /// Append a new page
    Add,

    /// Delete a page (the last page is kept)
    Delete {
        /// Page id
        id: String,
    },

    /// Change a page's title or description
    Rename {
        /// Page id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },
}

pub fn page(args: PageArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());
    let mut doc = load_document(&path)?;

    match args.command {
        PageCommand::Add => {
            let id = doc.add_page();
            println!("  {} Added {} {}", "✓".green(), doc.active_page().title.bright_white(), id.dimmed());
        }
        PageCommand::Delete { id } => {
            doc.delete_page(&id)?;
            println!("  {} Deleted page {}", "✓".green(), id.dimmed());
        }
        PageCommand::Rename { id, title, description } => {
            doc.update_page(
                &id,
                PagePatch {
                    title,
                    description,
                    ..PagePatch::default()
                },
            )?;
            println!("  {} Updated page {}", "✓".green(), id.dimmed());
        }
    }

    save_document(&doc, &path, config.pretty_export)
}
