//! Dossier CLI - research a company name into a structured profile.

mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use dossier_llm::OllamaProvider;
use dossier_research::{ResearchOptions, Researcher};
use dossier_search::SerperProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean JSON stream
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ResearchOptions::from_toml(&toml_str).map_err(anyhow::Error::msg)?
        }
        None => ResearchOptions::default(),
    };
    if let Some(deadline) = cli.deadline_secs {
        options.overall_deadline_secs = deadline;
    }
    options.validate().map_err(anyhow::Error::msg)?;

    let search = SerperProvider::new(&cli.serper_api_key)
        .map_err(|e| anyhow::anyhow!("search provider setup failed: {}", e))?;
    let llm = OllamaProvider::new(&cli.ollama_endpoint, &cli.model)
        .map_err(|e| anyhow::anyhow!("LLM provider setup failed: {}", e))?;

    let researcher = Researcher::new(search, llm, options);
    let profile = researcher.research(&cli.company).await?;

    let json = serde_json::to_string_pretty(&profile)?;
    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Profile written to {}", path.display());
        }
        None => println!("{}", json),
    }

    output::print_summary(&profile);
    Ok(())
}
