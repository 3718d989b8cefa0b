//! # Domain and Wire Types
//!
//! Everything here is created fresh for one submission cycle and dropped
//! on the next one. Nothing is persisted.
//!
//! ```text
//! raw form text ──trim──▶ SubmissionInput ──▶ LyricsRequest   (POST body)
//!                                               │
//!                          LyricsResponse ◀─────┤ 2xx
//!                          ApiErrorBody   ◀─────┘ non-2xx
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A trimmed, non-empty song query.
///
/// The only way to build one is [`SubmissionInput::parse`], so holding a
/// value means validation already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput(String);

impl SubmissionInput {
    /// Trims `raw` and returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body sent to the extraction service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LyricsRequest {
    pub message_request: String,
}

impl From<&SubmissionInput> for LyricsRequest {
    fn from(input: &SubmissionInput) -> Self {
        Self {
            message_request: input.as_str().to_string(),
        }
    }
}

/// One word/translation/context triple returned by the service.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: String,
    pub translation: String,
    pub context: String,
}

/// Success body: newline-delimited lyrics plus the vocabulary list.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LyricsResponse {
    pub lyrics: String,
    pub vocabulary: Vec<VocabularyEntry>,
}

/// Failure body. Only `detail` is read; anything else is ignored.
#[derive(Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// The human-readable reason, if the server sent a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}
