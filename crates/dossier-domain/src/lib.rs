//! Dossier Domain Layer
//!
//! Core value objects for the company research pipeline. Everything a
//! research run produces or consumes is defined here: search queries and
//! their categories, deduplicated evidence, trust tiers, deterministically
//! extracted identifiers, and the final company profile.
//!
//! ## Key Concepts
//!
//! - **SearchQuery**: one planned query with a category tag
//! - **EvidencePool**: ordered, URL-deduplicated search hits for a run
//! - **TrustTier**: static per-domain ranking, used for tie-breaking only
//! - **ExtractedIdentifier**: a pattern-matched identifier with confidence
//! - **CompanyProfile**: the structured record handed back to the caller
//!
//! Infrastructure (search backends, LLM providers) lives in other crates;
//! this crate holds no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod evidence;
pub mod identifier;
pub mod profile;
pub mod query;
pub mod retry;
pub mod run;
pub mod tier;

// Re-exports for convenience
pub use confidence::Confidence;
pub use evidence::{normalize_url, Evidence, EvidencePool};
pub use identifier::{ExtractedIdentifier, IdentifierKind};
pub use profile::CompanyProfile;
pub use query::{CompanyQuery, QueryCategory, SearchHit, SearchQuery};
pub use retry::RetryPolicy;
pub use run::RunMetadata;
pub use tier::TrustTier;
