//! Extracted identifier types

use crate::confidence::Confidence;
use crate::tier::TrustTier;

/// Kind of a deterministically extracted identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Legal Entity Identifier (20 chars, ISO 7064 checksum)
    Lei,

    /// US Employer Identification Number (9 digits)
    Ein,

    /// SEC Central Index Key (up to 10 digits)
    Cik,

    /// Delaware Division of Corporations file number
    DelawareFile,

    /// State / SEC commission file number (NNN-NNNNN)
    StateFile,

    /// Exchange ticker symbol
    Ticker,
}

impl IdentifierKind {
    /// Every kind, in extraction order
    pub fn all() -> [IdentifierKind; 6] {
        [
            IdentifierKind::Lei,
            IdentifierKind::Ein,
            IdentifierKind::Cik,
            IdentifierKind::DelawareFile,
            IdentifierKind::StateFile,
            IdentifierKind::Ticker,
        ]
    }

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Lei => "LEI",
            IdentifierKind::Ein => "EIN",
            IdentifierKind::Cik => "CIK",
            IdentifierKind::DelawareFile => "DELAWARE_FILE",
            IdentifierKind::StateFile => "STATE_FILE",
            IdentifierKind::Ticker => "TICKER",
        }
    }

    /// Parse a kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LEI" => Some(IdentifierKind::Lei),
            "EIN" => Some(IdentifierKind::Ein),
            "CIK" => Some(IdentifierKind::Cik),
            "DELAWARE_FILE" => Some(IdentifierKind::DelawareFile),
            "STATE_FILE" => Some(IdentifierKind::StateFile),
            "TICKER" => Some(IdentifierKind::Ticker),
            _ => None,
        }
    }
}

impl std::str::FromStr for IdentifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid identifier kind: {}", s))
    }
}

/// A deterministically extracted identifier with provenance
///
/// Multiple identifiers of the same kind may coexist in extractor output;
/// the assembler picks the best one per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIdentifier {
    /// Identifier kind
    pub kind: IdentifierKind,

    /// The raw matched text
    pub raw: String,

    /// Normalized value (separators stripped, padding applied)
    pub normalized: String,

    /// URL of the evidence entry the match came from
    pub source_url: String,

    /// Match confidence (label proximity + pattern strictness)
    pub confidence: Confidence,

    /// Trust tier of the source, for tie-breaking
    pub tier: TrustTier,
}

impl ExtractedIdentifier {
    /// Whether `self` beats `other` as the representative of its kind
    ///
    /// Higher confidence wins; ties go to the more trusted source tier.
    pub fn beats(&self, other: &ExtractedIdentifier) -> bool {
        match self.confidence.cmp(&other.confidence) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.tier.rank() < other.tier.rank(),
        }
    }
}
