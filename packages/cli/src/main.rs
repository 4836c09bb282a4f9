mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, catalog, duplicate, import, new, open, page, remove, set, share, tree, AddArgs,
    CatalogArgs, DuplicateArgs, ImportArgs, NewArgs, OpenArgs, PageArgs, RemoveArgs, SetArgs,
    ShareArgs, TreeArgs,
};
use tracing_subscriber::EnvFilter;

/// Pagecraft CLI - build page layouts from a component palette
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log editor activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a document with one empty page
    New(NewArgs),

    /// Import a JSON file (pages or a bare node list) into a document
    Import(ImportArgs),

    /// Print a share link for a document
    Share(ShareArgs),

    /// Decode a share link into a document file
    Open(OpenArgs),

    /// Add a component to a page
    Add(AddArgs),

    /// Remove a node and its subtree
    Remove(RemoveArgs),

    /// Clone a node next to itself
    Duplicate(DuplicateArgs),

    /// Merge props into a node
    Set(SetArgs),

    /// Add, delete or rename pages
    Page(PageArgs),

    /// Print the node outline of every page
    Tree(TreeArgs),

    /// List the component palette
    Catalog(CatalogArgs),
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "pagecraft_editor=debug,pagecraft=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::New(args) => new(args, &cwd),
        Command::Import(args) => import(args, &cwd),
        Command::Share(args) => share(args, &cwd),
        Command::Open(args) => open(args, &cwd),
        Command::Add(args) => add(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Duplicate(args) => duplicate(args, &cwd),
        Command::Set(args) => set(args, &cwd),
        Command::Page(args) => page(args, &cwd),
        Command::Tree(args) => tree(args, &cwd),
        Command::Catalog(args) => catalog(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
