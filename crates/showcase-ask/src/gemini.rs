//! Minimal client for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_PROMPT: &str = "Explain what an API is like I'm 10 years old.";
pub const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Error)]
pub enum AskError {
    #[error("no API key; set GEMINI_API_KEY or pass --api-key")]
    MissingKey,
    #[error("API key rejected (HTTP {status}): {message}")]
    Auth { status: u16, message: String },
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("response contained no text")]
    EmptyResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// A single user turn holding `prompt`.
    pub fn prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
                role: None,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first candidate, its parts joined in order.
    pub fn text(&self) -> Result<String, AskError> {
        let text: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(AskError::EmptyResponse);
        }
        Ok(text)
    }
}

pub fn endpoint(model: &str) -> String {
    format!("{}/{}:generateContent", API_BASE, model)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

impl ErrorBody {
    /// A bad key comes back as HTTP 400 `INVALID_ARGUMENT` with an
    /// `API_KEY_*` reason in the details.
    fn rejects_key(&self) -> bool {
        let by_reason = self
            .details
            .iter()
            .filter_map(|d| d.reason.as_deref())
            .any(|reason| reason.starts_with("API_KEY_"));
        let by_message = self.status.as_deref() == Some("INVALID_ARGUMENT")
            && self.message.to_ascii_lowercase().contains("api key");
        by_reason || by_message
    }
}

/// Turn a non-2xx reply into an error, preferring the API's own message.
pub fn status_error(status: u16, body: &str) -> AskError {
    let (message, rejects_key) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let rejects_key = envelope.error.rejects_key();
            (envelope.error.message, rejects_key)
        }
        Err(_) => (body.trim().to_string(), false),
    };
    match status {
        401 | 403 => AskError::Auth { status, message },
        _ if rejects_key => AskError::Auth { status, message },
        _ => AskError::Api { status, message },
    }
}

/// Send `prompt` to `model` and return the generated text. One request, no retry.
pub fn ask(prompt: &str, api_key: &str, model: &str) -> Result<String, AskError> {
    if api_key.trim().is_empty() {
        return Err(AskError::MissingKey);
    }
    let url = endpoint(model);
    log::debug!("[ask] POST {}", url);
    let response = match ureq::post(&url)
        .set(API_KEY_HEADER, api_key.trim())
        .send_json(GenerateRequest::prompt(prompt))
    {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            let body = response.into_string().unwrap_or_default();
            return Err(status_error(status, &body));
        }
        Err(ureq::Error::Transport(e)) => return Err(AskError::Transport(e.to_string())),
    };
    let parsed: GenerateResponse = response
        .into_json()
        .map_err(|e| AskError::Decode(e.to_string()))?;
    if let Some(reason) = parsed
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref())
    {
        log::debug!("[ask] finish reason {}", reason);
    }
    parsed.text()
}
