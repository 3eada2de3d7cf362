//! Per-kind identifier matchers
//!
//! Each kind gets one strict-format pattern plus a label vocabulary. A
//! match with an explicit label in the preceding window is `High`
//! confidence; a strict checksum-backed match without a label is `Medium`;
//! a weak numeric-only match without a label is `Low` and must be
//! out-competed downstream before it reaches the profile.

use crate::checksum::lei_is_valid;
use dossier_domain::{Confidence, IdentifierKind};
use regex::Regex;
use std::sync::LazyLock;

/// Characters of text scanned backwards from a match for its label
const LABEL_WINDOW: usize = 48;

static LEI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z0-9]{18}[0-9]{2})\b").unwrap());

static EIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{2}-\d{7})\b").unwrap());

static CIK_LABELED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:CIK|Central\s+Index\s+Key)\s*(?:No\.?|Number)?\s*[:#]?\s*(\d{1,10})\b")
        .unwrap()
});

static CIK_EDGAR_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)edgar/data/(\d{1,10})").unwrap());

static CIK_QUERY_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[?&]cik=(\d{1,10})").unwrap());

static FILE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfile\s*(?:no\.?|number)\s*[:#]?\s*(\d{6,7})\b").unwrap()
});

static STATE_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{3}-\d{5})\b").unwrap());

static TICKER_EXCHANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:NYSE|NASDAQ|Nasdaq|AMEX|OTC)\s*:\s*([A-Z]{1,5})\b").unwrap()
});

static TICKER_LABELED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[Tt]icker(?:\s+[Ss]ymbol)?|[Ss]tock\s+[Ss]ymbol):?\s+([A-Z]{1,5})\b")
        .unwrap()
});

const LEI_LABELS: &[&str] = &["lei", "legal entity identifier"];
const EIN_LABELS: &[&str] = &["ein", "employer identification number", "tax id", "irs"];
const STATE_FILE_LABELS: &[&str] = &[
    "commission file number",
    "file number",
    "file no",
    "registration",
];

/// One raw match from a kind's matcher, pre-provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundIdentifier {
    /// Matched text as it appeared
    pub raw: String,

    /// Normalized value for the kind
    pub normalized: String,

    /// Confidence from label proximity and pattern strictness
    pub confidence: Confidence,
}

/// Scan one evidence entry's text (and raw URL) for a kind's identifiers
///
/// The URL is scanned before normalization because EDGAR embeds the CIK in
/// paths and `cik=` query parameters that dedup normalization strips.
pub fn scan(kind: IdentifierKind, text: &str, url: &str) -> Vec<FoundIdentifier> {
    match kind {
        IdentifierKind::Lei => scan_lei(text),
        IdentifierKind::Ein => scan_ein(text),
        IdentifierKind::Cik => scan_cik(text, url),
        IdentifierKind::DelawareFile => scan_delaware_file(text),
        IdentifierKind::StateFile => scan_state_file(text),
        IdentifierKind::Ticker => scan_ticker(text),
    }
}

fn scan_lei(text: &str) -> Vec<FoundIdentifier> {
    let mut found = Vec::new();
    for caps in LEI_RE.captures_iter(text) {
        let m = caps.get(1).unwrap();
        // Non-conforming checksums are rejected outright, never emitted
        if !lei_is_valid(m.as_str()) {
            continue;
        }
        let confidence = if labeled(text, m.start(), LEI_LABELS) {
            Confidence::High
        } else {
            Confidence::Medium
        };
        found.push(FoundIdentifier {
            raw: m.as_str().to_string(),
            normalized: m.as_str().to_string(),
            confidence,
        });
    }
    found
}

fn scan_ein(text: &str) -> Vec<FoundIdentifier> {
    let mut found = Vec::new();
    for caps in EIN_RE.captures_iter(text) {
        let m = caps.get(1).unwrap();
        let confidence = if labeled(text, m.start(), EIN_LABELS) {
            Confidence::High
        } else {
            // Bare NN-NNNNNNN is a weak signal on its own
            Confidence::Low
        };
        found.push(FoundIdentifier {
            raw: m.as_str().to_string(),
            normalized: m.as_str().replace('-', ""),
            confidence,
        });
    }
    found
}

fn scan_cik(text: &str, url: &str) -> Vec<FoundIdentifier> {
    let mut found = Vec::new();

    for caps in CIK_LABELED_RE.captures_iter(text) {
        let digits = caps.get(1).unwrap().as_str();
        found.push(FoundIdentifier {
            raw: digits.to_string(),
            normalized: pad_cik(digits),
            confidence: Confidence::High,
        });
    }

    // EDGAR structures its URLs around the CIK; that placement is as
    // explicit as a textual label
    for re in [&*CIK_EDGAR_PATH_RE, &*CIK_QUERY_PARAM_RE] {
        for caps in re.captures_iter(url) {
            let digits = caps.get(1).unwrap().as_str();
            found.push(FoundIdentifier {
                raw: digits.to_string(),
                normalized: pad_cik(digits),
                confidence: Confidence::High,
            });
        }
    }

    found
}

fn scan_delaware_file(text: &str) -> Vec<FoundIdentifier> {
    // Without Delaware context a bare file number belongs to StateFile
    if !text.to_lowercase().contains("delaware") {
        return Vec::new();
    }

    FILE_NUMBER_RE
        .captures_iter(text)
        .map(|caps| {
            let digits = caps.get(1).unwrap().as_str();
            FoundIdentifier {
                raw: digits.to_string(),
                normalized: digits.to_string(),
                confidence: Confidence::High,
            }
        })
        .collect()
}

fn scan_state_file(text: &str) -> Vec<FoundIdentifier> {
    let mut found = Vec::new();
    for caps in STATE_FILE_RE.captures_iter(text) {
        let m = caps.get(1).unwrap();
        let confidence = if labeled(text, m.start(), STATE_FILE_LABELS) {
            Confidence::High
        } else {
            Confidence::Low
        };
        found.push(FoundIdentifier {
            raw: m.as_str().to_string(),
            // Canonical commission-file form keeps its hyphen
            normalized: m.as_str().to_string(),
            confidence,
        });
    }
    found
}

fn scan_ticker(text: &str) -> Vec<FoundIdentifier> {
    let mut found = Vec::new();
    for re in [&*TICKER_EXCHANGE_RE, &*TICKER_LABELED_RE] {
        for caps in re.captures_iter(text) {
            let symbol = caps.get(1).unwrap().as_str();
            found.push(FoundIdentifier {
                raw: symbol.to_string(),
                normalized: symbol.to_string(),
                confidence: Confidence::High,
            });
        }
    }
    found
}

/// Whether any label appears in the window of text before the match
fn labeled(text: &str, match_start: usize, labels: &[&str]) -> bool {
    let mut window_start = match_start.saturating_sub(LABEL_WINDOW);
    while !text.is_char_boundary(window_start) {
        window_start -= 1;
    }
    let window = text[window_start..match_start].to_lowercase();

    labels.iter().any(|label| {
        if label.contains(' ') {
            window.contains(label)
        } else {
            window
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|token| token == *label)
        }
    })
}

fn pad_cik(digits: &str) -> String {
    format!("{:0>10}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lei_labeled_high() {
        let found = scan_lei("LEI: HWUPKR0MPOU8FGXBT394 for Apple Inc.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].normalized, "HWUPKR0MPOU8FGXBT394");
        assert_eq!(found[0].confidence, Confidence::High);
    }

    #[test]
    fn test_lei_unlabeled_medium() {
        let found = scan_lei("registered under HWUPKR0MPOU8FGXBT394 since 2012");
        assert_eq!(found[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_lei_bad_checksum_rejected() {
        let found = scan_lei("LEI: HWUPKR0MPOU8FGXBT395");
        assert!(found.is_empty());
    }

    #[test]
    fn test_lei_label_does_not_match_inside_words() {
        // "nuclei" must not count as an LEI label
        let found = scan_lei("nuclei research at HWUPKR0MPOU8FGXBT394");
        assert_eq!(found[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_ein_labeled_and_normalized() {
        let found = scan_ein("EIN: 94-2404170");
        assert_eq!(found[0].normalized, "942404170");
        assert_eq!(found[0].raw, "94-2404170");
        assert_eq!(found[0].confidence, Confidence::High);
    }

    #[test]
    fn test_ein_unlabeled_is_low() {
        let found = scan_ein("reference 94-2404170 in the footer");
        assert_eq!(found[0].confidence, Confidence::Low);
    }

    #[test]
    fn test_ein_does_not_match_commission_file() {
        // NNN-NNNNN is the state-file shape, not an EIN
        assert!(scan_ein("Commission File Number: 001-34756").is_empty());
    }

    #[test]
    fn test_cik_labeled_variants() {
        for text in [
            "CIK: 320193",
            "CIK #320193",
            "CIK No. 320193",
            "Central Index Key: 320193",
        ] {
            let found = scan_cik(text, "https://example.com");
            assert_eq!(found.len(), 1, "no match for {:?}", text);
            assert_eq!(found[0].normalized, "0000320193");
            assert_eq!(found[0].confidence, Confidence::High);
        }
    }

    #[test]
    fn test_cik_from_edgar_url() {
        let found = scan_cik(
            "Annual report",
            "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/aapl.htm",
        );
        assert!(found.iter().any(|f| f.normalized == "0000320193"));
    }

    #[test]
    fn test_cik_from_query_param() {
        let found = scan_cik(
            "browse filings",
            "https://www.sec.gov/cgi-bin/browse-edgar?action=getcompany&cik=0000320193",
        );
        assert!(found.iter().any(|f| f.normalized == "0000320193"));
    }

    #[test]
    fn test_delaware_file_requires_context() {
        let with_context =
            scan_delaware_file("Delaware Division of Corporations File Number: 0806592");
        assert_eq!(with_context.len(), 1);
        assert_eq!(with_context[0].normalized, "0806592");

        let without_context = scan_delaware_file("File Number: 0806592");
        assert!(without_context.is_empty());
    }

    #[test]
    fn test_state_file_labeled_high() {
        let found = scan_state_file("Commission File Number: 001-34756");
        assert_eq!(found[0].normalized, "001-34756");
        assert_eq!(found[0].confidence, Confidence::High);
    }

    #[test]
    fn test_state_file_unlabeled_low() {
        let found = scan_state_file("order 123-45678 shipped");
        assert_eq!(found[0].confidence, Confidence::Low);
    }

    #[test]
    fn test_ticker_exchange_form() {
        let found = scan_ticker("Apple Inc. (NASDAQ: AAPL) closed higher");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].normalized, "AAPL");
    }

    #[test]
    fn test_ticker_labeled_form() {
        let found = scan_ticker("stock symbol AAPL on the Nasdaq");
        assert!(found.iter().any(|f| f.normalized == "AAPL"));
    }

    #[test]
    fn test_ticker_needs_label() {
        assert!(scan_ticker("THE BIG SALE").is_empty());
    }

    proptest! {
        // Extraction output always satisfies each kind's format rules
        #[test]
        fn prop_lei_output_always_valid(text in "[A-Z0-9 :.]{0,80}") {
            for found in scan_lei(&text) {
                prop_assert!(lei_is_valid(&found.normalized));
            }
        }

        #[test]
        fn prop_ein_output_always_nine_digits(text in "[0-9A-Za-z :.-]{0,80}") {
            for found in scan_ein(&text) {
                prop_assert_eq!(found.normalized.len(), 9);
                prop_assert!(found.normalized.chars().all(|c| c.is_ascii_digit()));
            }
        }

        #[test]
        fn prop_cik_output_always_ten_digits(text in "(CIK[: #]{0,3})?[0-9]{0,12}") {
            for found in scan_cik(&text, "https://example.com") {
                prop_assert_eq!(found.normalized.len(), 10);
                prop_assert!(found.normalized.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
