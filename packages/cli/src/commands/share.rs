use super::load_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Document file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Origin for the link (overrides config)
    #[arg(long)]
    pub origin: Option<String>,
}

pub fn share(args: ShareArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.file.as_deref());
    let doc = load_document(&path)?;

    let origin = args.origin.as_deref().unwrap_or(&config.origin);
    let url = doc.share_url(origin)?;

    tracing::debug!(bytes = url.len(), "generated share link");
    println!("{}", url);
    Ok(())
}
