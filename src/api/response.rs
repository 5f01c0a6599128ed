use super::models::{GenerateContentResponse, Part};
use crate::error::Result;
use std::fmt;

/// Why a response could not be turned into a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    NoCandidates,
    NoParts,
    NoText,
    UnknownFunction(String),
}

impl fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedResponse::NoCandidates => write!(f, "No candidates in the response"),
            MalformedResponse::NoParts => write!(f, "No parts in the first candidate"),
            MalformedResponse::NoText => write!(f, "No text in the first part"),
            MalformedResponse::UnknownFunction(name) => {
                write!(f, "Model requested unknown function '{}'", name)
            }
        }
    }
}

/// Parse a `generateContent` body. An empty body means the model sent nothing back.
pub fn parse_response(body: &str) -> Result<Option<GenerateContentResponse>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(body)?))
}

/// First part of the first candidate
pub fn first_part(response: &GenerateContentResponse) -> std::result::Result<&Part, MalformedResponse> {
    let candidate = response
        .candidates
        .first()
        .ok_or(MalformedResponse::NoCandidates)?;

    candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.first())
        .ok_or(MalformedResponse::NoParts)
}

/// Text of the first part, for replies that must be plain text. Blank text
/// counts as no text.
pub fn extract_text(response: &GenerateContentResponse) -> std::result::Result<String, MalformedResponse> {
    let part = first_part(response)?;
    match part.text.as_deref() {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(MalformedResponse::NoText),
    }
}
