use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::catalog::groups;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn catalog(args: CatalogArgs, _cwd: &str) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(groups())?);
        return Ok(());
    }

    for group in groups() {
        println!("{}", group.title.bright_blue().bold());
        for def in &group.items {
            let defaults = def
                .default_props
                .as_ref()
                .map(|props| props.keys().cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            println!("  {:<16} {:<16} {}", def.node_type, def.label, defaults.dimmed());
        }
    }
    Ok(())
}
