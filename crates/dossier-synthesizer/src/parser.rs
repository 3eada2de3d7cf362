//! Parse LLM output into a profile draft

use crate::error::SynthesisError;
use crate::types::ProfileDraft;

/// Parse the model's reply into a draft
///
/// Markdown code fences and surrounding prose are tolerated; the reply is
/// reduced to its outermost JSON object before deserialization.
pub fn parse_draft(response: &str) -> Result<ProfileDraft, SynthesisError> {
    let json_str = extract_json(response)?;
    let draft: ProfileDraft = serde_json::from_str(&json_str)?;
    Ok(draft)
}

/// Extract the JSON object from a reply, handling markdown code blocks and
/// leading/trailing prose
fn extract_json(response: &str) -> Result<String, SynthesisError> {
    let trimmed = response.trim();

    // Strip a markdown code block wrapper first
    let inner = if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(SynthesisError::InvalidFormat("Empty code block".to_string()));
        }
        lines[1..lines.len().saturating_sub(1)].join("\n")
    } else {
        trimmed.to_string()
    };

    // Models sometimes add prose around the object; keep the outermost
    // brace window
    let start = inner
        .find('{')
        .ok_or_else(|| SynthesisError::InvalidFormat("No JSON object in reply".to_string()))?;
    let end = inner
        .rfind('}')
        .ok_or_else(|| SynthesisError::InvalidFormat("Unterminated JSON object".to_string()))?;
    if end < start {
        return Err(SynthesisError::InvalidFormat(
            "No JSON object in reply".to_string(),
        ));
    }

    Ok(inner[start..=end].to_string())
}
