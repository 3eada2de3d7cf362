//! Dossier Profile Synthesizer
//!
//! Converts an evidence pool into a structured company profile draft
//! using an LLM.
//!
//! # Architecture
//!
//! ```text
//! EvidencePool + ExtractedIdentifiers → Prompt → LLM → ProfileDraft
//! ```
//!
//! The prompt presents the most trusted excerpts first, lists
//! deterministically extracted identifiers as ground truth, and asks for a
//! single JSON object. Parsing is lenient (markdown fences, surrounding
//! prose, numeric scalars) and each failure mode gets exactly one retry: a
//! trimmed re-prompt after a timeout, a corrective re-prompt after a parse
//! failure.
//!
//! The draft is not the final profile. The research pipeline merges it
//! with the extracted identifiers, which always win on overlap.

#![warn(missing_docs)]

mod error;
mod parser;
mod prompt;
mod synthesizer;
mod types;

pub use error::SynthesisError;
pub use parser::parse_draft;
pub use prompt::{PromptBuilder, DEFAULT_EXCERPT_BUDGET};
pub use synthesizer::{Synthesizer, SynthesizerConfig};
pub use types::ProfileDraft;
