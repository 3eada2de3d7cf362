//! Error types for the research pipeline

use dossier_search::SearchError;
use thiserror::Error;

/// Errors that can fail a research run outright
///
/// Everything else (individual query failures, synthesis failures, the
/// deadline) degrades the run instead of failing it.
#[derive(Error, Debug)]
pub enum ResearchError {
    /// The company name was unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The search backend produced no usable results at all
    #[error("Search backend failure: {0}")]
    SearchBackend(#[from] SearchError),
}
