//! Categorical confidence for extracted identifiers

/// Confidence of a deterministic identifier match
///
/// Ordering is `Low < Medium < High`, so the assembler can pick the best
/// candidate with a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// Weak numeric-pattern-only match without a label
    Low,

    /// Strict-format match without an explicit label nearby
    Medium,

    /// Explicit label (e.g. "LEI:", "CIK No.") within a short window
    High,
}

impl Confidence {
    /// Get the confidence name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Parse a confidence from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Confidence::Low),
            "medium" => Some(Confidence::Medium),
            "high" => Some(Confidence::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid confidence: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
        assert_eq!(
            Confidence::High,
            Confidence::High.max(Confidence::Low)
        );
    }

    #[test]
    fn test_confidence_round_trip() {
        for c in [Confidence::Low, Confidence::Medium, Confidence::High] {
            assert_eq!(Confidence::parse(c.as_str()), Some(c));
        }
        assert_eq!(Confidence::parse("bogus"), None);
    }
}
