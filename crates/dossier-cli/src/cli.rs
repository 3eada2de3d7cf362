//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Dossier - research a company name into a structured profile.
#[derive(Debug, Parser)]
#[command(name = "dossier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Company name to research
    pub company: String,

    /// Serper API key
    #[arg(long, env = "SERPER_API_KEY", hide_env_values = true)]
    pub serper_api_key: String,

    /// Ollama endpoint
    #[arg(long, env = "OLLAMA_ENDPOINT", default_value = "http://localhost:11434")]
    pub ollama_endpoint: String,

    /// Ollama model name
    #[arg(long, env = "OLLAMA_MODEL", default_value = "llama3.1")]
    pub model: String,

    /// Research options file (TOML)
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Override the overall deadline (seconds)
    #[arg(long)]
    pub deadline_secs: Option<u64>,

    /// Write the profile JSON to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
