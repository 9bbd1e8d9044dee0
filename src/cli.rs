use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quicksearch")]
#[command(about = "Incremental quick search over a documentation index", long_about = None)]
pub struct Cli {
    /// Index file: a JSON object of name -> [{url, txt}], optionally wrapped
    /// in a `var name = ...;` assignment
    #[arg(short, long, env = "QUICKSEARCH_INDEX")]
    pub index: String,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the index as an MCP server over stdio (default)
    Serve,
    /// Print the ranked results for one query
    Query {
        query: String,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}
