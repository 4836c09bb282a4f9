use super::save_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{share::share_payload, Document};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Share URL, or the bare `data` payload
    pub link: String,

    /// Where to write the decoded document (defaults to the configured file)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn open(args: OpenArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let out = config.document_path(cwd, args.out.as_deref());

    if out.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), out.display().to_string().bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let payload = share_payload(&args.link).unwrap_or(args.link.trim());

    // An unreadable link yields an empty document; the store has already logged why
    let mut doc = Document::new();
    if let Err(e) = doc.load_from_compressed(payload) {
        tracing::warn!(error = %e, "share link could not be decoded, starting from an empty page");
    }

    save_document(&doc, &out, config.pretty_export)?;
    println!("  {} Opened link → {} ({} pages)", "✓".green(), out.display(), doc.pages().len());
    Ok(())
}
