//! Wire types exchanged between the page, the relay and the answering backend.
//!
//! The relay never inspects these shapes; only the presentation side decodes
//! them, and then only to render what the backend sent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{QiyasError, Result};

/// Body returned by the relay when forwarding fails for any reason.
pub const RELAY_FAILURE_MESSAGE: &str = "An error occurred processing your request";

/// Shown when a failed response carries no `error` text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// `{ "question": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
}

impl Question {
    pub fn new(question: impl Into<String>) -> Self {
        Self { question: question.into() }
    }
}

/// One retrieved passage plus its surrounding references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceExcerpt {
    pub reference: String,
    pub text: String,
    /// Neighbouring reference → its text. Keys are unique; rendered sorted.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    #[serde(default)]
    pub chapter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub sources: Vec<SourceExcerpt>,
    pub reasoning: String,
    /// Backend-defined score, carried in the form the backend wrote it.
    pub confidence: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    pub fn relay_failure() -> Self {
        Self::new(RELAY_FAILURE_MESSAGE)
    }
}

/// Read a relay reply the way a browser client does: a success status
/// carries an [`Answer`], anything else carries an `error` string.
///
/// A success body that holds an `error` string instead of an answer is
/// reported as that error; the relay does not re-examine backend statuses.
pub fn interpret_reply(status: u16, body: Value) -> Result<Answer> {
    let reported = body
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string);

    if !(200..300).contains(&status) {
        return Err(QiyasError::Backend {
            status,
            message: reported.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        });
    }

    if let Some(message) = reported {
        if body.get("sources").is_none() {
            return Err(QiyasError::Backend { status, message });
        }
    }

    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_preserves_source_order() {
        let body = json!({
            "sources": [
                { "reference": "2:153", "text": "Seek help through patience", "context": {}, "chapter": "2" },
                { "reference": "3:200", "text": "Be patient and persevere", "context": {}, "chapter": "3" },
                { "reference": "103:3", "text": "Advise one another to patience", "context": {}, "chapter": "103" },
            ],
            "reasoning": "r",
            "confidence": 0.82,
        });
        let answer = interpret_reply(200, body).unwrap();
        let refs: Vec<_> = answer.sources.iter().map(|s| s.reference.as_str()).collect();
        assert_eq!(refs, vec!["2:153", "3:200", "103:3"]);
        assert_eq!(answer.confidence.as_f64(), Some(0.82));
    }

    #[test]
    fn test_missing_context_and_chapter_default_to_empty() {
        let body = json!({
            "sources": [{ "reference": "1:1", "text": "t" }],
            "reasoning": "",
            "confidence": 0,
        });
        let answer = interpret_reply(200, body).unwrap();
        assert!(answer.sources[0].context.is_empty());
        assert_eq!(answer.sources[0].chapter, "");
        assert_eq!(answer.confidence.to_string(), "0");
    }

    #[test]
    fn test_confidence_is_not_clamped() {
        let body = json!({ "sources": [], "reasoning": "", "confidence": 7.5 });
        assert_eq!(interpret_reply(200, body).unwrap().confidence.as_f64(), Some(7.5));
    }

    #[test]
    fn test_failure_status_uses_reported_error() {
        let err = interpret_reply(500, json!({ "error": RELAY_FAILURE_MESSAGE })).unwrap_err();
        match err {
            QiyasError::Backend { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, RELAY_FAILURE_MESSAGE);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failure_status_without_error_field_falls_back() {
        let err = interpret_reply(502, json!({ "detail": "bad gateway" })).unwrap_err();
        assert!(matches!(
            err,
            QiyasError::Backend { ref message, .. } if message == FALLBACK_ERROR_MESSAGE
        ));
    }

    #[test]
    fn test_success_status_with_error_body_is_an_error() {
        let err = interpret_reply(200, json!({ "error": "Please ask a question" })).unwrap_err();
        assert!(matches!(
            err,
            QiyasError::Backend { ref message, .. } if message == "Please ask a question"
        ));
    }

    #[test]
    fn test_success_status_with_malformed_answer_is_serialization_error() {
        let err = interpret_reply(200, json!({ "reasoning": 3 })).unwrap_err();
        assert!(matches!(err, QiyasError::Serialization(_)));
    }
}
