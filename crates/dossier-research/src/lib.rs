//! Dossier Research Pipeline
//!
//! Resolves a free-text company name into a structured corporate profile.
//!
//! # Architecture
//!
//! ```text
//! name → Planner → Aggregator → Extractor → Synthesizer → Assembler → CompanyProfile
//! ```
//!
//! The planner fans the name out into categorized search queries; the
//! aggregator runs them with bounded concurrency into a deduplicated
//! evidence pool; the extractor pulls checksum-validated identifiers from
//! the pool; the synthesizer asks an LLM for a profile draft; the
//! assembler merges everything, with deterministic identifiers overriding
//! the draft wherever they overlap.
//!
//! # Example
//!
//! ```no_run
//! use dossier_llm::MockProvider;
//! use dossier_research::{Researcher, ResearchOptions};
//! use dossier_search::MockSearchProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let researcher = Researcher::new(
//!     MockSearchProvider::new(),
//!     MockProvider::new("{}"),
//!     ResearchOptions::default(),
//! );
//!
//! let profile = researcher.research("Apple").await?;
//! println!("{}", serde_json::to_string_pretty(&profile)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assembler;
mod error;
mod options;
mod pipeline;
mod planner;

pub use assembler::assemble;
pub use error::ResearchError;
pub use options::ResearchOptions;
pub use pipeline::Researcher;
pub use planner::plan;
