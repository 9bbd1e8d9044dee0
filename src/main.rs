use anyhow::Context;
use clap::Parser;
use quicksearch::cli::{Cli, Commands};
use quicksearch::config::QuickSearchConfig;
use quicksearch::search::SearchIndex;
use quicksearch::server::{QuickSearchServer, expand_tilde};
use quicksearch::tools::search::format_search_results;
use rmcp::{ServiceExt, transport::stdio};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the MCP protocol
    quicksearch::tracing::init();

    let cli = Cli::parse();
    let config = QuickSearchConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let index_path = expand_tilde(&cli.index);
    let index = SearchIndex::load(Path::new(index_path.as_ref()))
        .await
        .with_context(|| format!("Failed to load search index from {}", index_path))?;
    let index = Arc::new(index);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!(
                "Starting quicksearch MCP server ({} entries, strategy {})",
                index.len(),
                config.strategy
            );

            let server = QuickSearchServer::new(index, config);
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;

            service.waiting().await?;
        }
        Commands::Query { query, limit } => {
            let server = QuickSearchServer::new(index, config);
            let results = server.session().search(&query, limit).await;
            print!("{}", format_search_results(&results));
        }
    }

    Ok(())
}
