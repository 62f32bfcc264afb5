use log::{debug, warn};
use serde_json::Value;

use crate::errors::ExtractionError;

/// Locate and parse the JSON payload embedded in free-form model output.
///
/// Two ordered extraction strategies, no more: first the greedy span from
/// the first `{` to the last `}`, then the inner content of a fenced code
/// block labeled `json`. Anything beyond that (brace balancing, trailing
/// comma repair) is out of scope; callers treat failure as retryable at
/// the generation level.
pub fn extract_json(raw: &str) -> Result<Value, ExtractionError> {
    let mut last_parse_error: Option<String> = None;

    if let Some(span) = outer_brace_span(raw) {
        match serde_json::from_str::<Value>(span) {
            Ok(value) => {
                debug!("Extracted JSON from outer-brace span ({} chars)", span.len());
                return Ok(value);
            }
            Err(e) => {
                debug!("Outer-brace span is not valid JSON: {}", e);
                last_parse_error = Some(e.to_string());
            }
        }
    }

    if let Some(span) = fenced_json_block(raw) {
        match serde_json::from_str::<Value>(span) {
            Ok(value) => {
                debug!("Extracted JSON from fenced code block ({} chars)", span.len());
                return Ok(value);
            }
            Err(e) => {
                debug!("Fenced block content is not valid JSON: {}", e);
                last_parse_error = Some(e.to_string());
            }
        }
    }

    match last_parse_error {
        Some(message) => {
            warn!("Model response contained an object-shaped span, but it failed to parse");
            Err(ExtractionError::MalformedJson(message))
        }
        None => {
            warn!("Model response contained no JSON object");
            Err(ExtractionError::NoJsonFound)
        }
    }
}

/// The span from the first `{` through the last `}`, if both exist in order
fn outer_brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// The inner content of the first code fence explicitly labeled `json`
fn fenced_json_block(raw: &str) -> Option<&str> {
    let fence_start = raw.find("```json")?;
    let body = &raw[fence_start + "```json".len()..];
    let fence_end = body.find("```")?;
    Some(body[..fence_end].trim())
}
